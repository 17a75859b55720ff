//! Bot reply texts
//!
//! Each builder reads the session it is given and never changes it.

use crate::interpreter::SummaryQuery;
use crate::models::{Category, Goal, Money, Session, Transaction, TransactionType};

use super::EngineConfig;

pub const WELCOME: &str = "Olá! Sou o seu copiloto financeiro. Digite um gasto, uma dúvida ou peça uma dica para começarmos.";

pub const RESET_DONE: &str = "Beleza, começamos do zero! Pode registrar um novo movimento.";

pub const NOT_UNDERSTOOD: &str = "Ainda não entendi esse comando. Tente algo como \"gastei R$75 com mercado\" ou \"recebi R$500 de freelance\".";

/// Confirmation after logging a transaction
///
/// Investments are confirmed as "gasto", like any other outflow.
pub fn transaction_confirmation(txn: &Transaction, config: &EngineConfig) -> String {
    let verb = if txn.is_income() { "receita" } else { "gasto" };
    format!(
        "Pronto! registrado como {} em {} no valor de {}.",
        verb,
        txn.category,
        config.format(txn.amount)
    )
}

/// Rule-based tip for a transaction already appended to `session`
pub fn insight(session: &Session, txn: &Transaction, config: &EngineConfig) -> String {
    if txn.is_income() {
        return format!(
            "Dica rápida: considere destinar {}% ({}) para a sua reserva ou investimentos.",
            config.reserve_percent,
            config.format(txn.amount.percent(config.reserve_percent))
        );
    }

    let category_total = session.total_for(txn.category, txn.kind);
    if txn.category == Category::Food && category_total > config.food_alert_threshold {
        return format!(
            "Alerta: seus gastos com alimentação estão acima de {} neste mês. Que tal planejar as compras da semana?",
            config.format(config.food_alert_threshold)
        );
    }

    format!(
        "Saldo atual: {}. Continue me contando suas movimentações!",
        config.format(session.totals().balance())
    )
}

/// Answer to "quanto gastei...?" style questions
pub fn summary_answer(session: &Session, query: &SummaryQuery, config: &EngineConfig) -> String {
    match query {
        SummaryQuery::Category(word) => {
            let (label, total) = match Category::from_label(word) {
                Some(category) => (
                    category.label().to_string(),
                    session.total_for(category, TransactionType::Expense),
                ),
                None => (capitalize(word), Money::zero()),
            };

            if total.is_zero() {
                format!("Você ainda não registrou gastos em {}.", label)
            } else {
                format!(
                    "Até agora, você gastou {} em {}.",
                    config.format(total),
                    label
                )
            }
        }
        SummaryQuery::Overall => {
            let totals = session.totals();
            format!(
                "Você recebeu {}, gastou {} e está com saldo de {}.",
                config.format(totals.income),
                config.format(totals.expense),
                config.format(totals.balance())
            )
        }
    }
}

/// The active goals, one per line
pub fn goals_list(goals: &[Goal]) -> String {
    let mut out = String::from("Aqui vão suas metas atuais:");
    for goal in goals {
        out.push_str(&format!("\n• {}", goal));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
