//! Summary panel and goal list formatting

use crate::config::Settings;
use crate::models::{Goal, Session};

/// Income, expense and balance, one per line
pub fn format_summary(session: &Session, settings: &Settings) -> String {
    let totals = session.totals();
    let symbol = &settings.currency_symbol;

    let mut output = String::new();
    output.push_str(&format!(
        "Receitas: {:>16}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Gastos:   {:>16}\n",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(26));
    output.push('\n');
    output.push_str(&format!(
        "Saldo:    {:>16}\n",
        totals.balance().format_with_symbol(symbol)
    ));
    output
}

/// Active goals with their tips
pub fn format_goals(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "Nenhuma meta ativa.\n".to_string();
    }

    let mut output = String::new();
    for goal in goals {
        output.push_str(&format!("• {}\n  {}\n", goal.title, goal.tip));
    }
    output
}
