//! Transaction list formatting
//!
//! Most recent first, the way the chat sidebar shows them.

use std::fmt::Write;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Session, Transaction};

/// Shown when there is nothing to list
pub const EMPTY_LIST: &str = "Ainda sem transações";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Quando")]
    when: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Descrição")]
    description: String,
    #[tabled(rename = "Valor")]
    amount: String,
}

impl TransactionRow {
    fn from_transaction(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            when: format_when(txn, &settings.date_format),
            kind: txn.kind.to_string(),
            category: txn.category.to_string(),
            description: truncate(&txn.description, 40),
            amount: format!(
                "{} {}",
                txn.sign(),
                txn.amount.format_with_symbol(&settings.currency_symbol)
            ),
        }
    }
}

/// Table of the `limit` most recent transactions
pub fn format_recent_transactions(session: &Session, limit: usize, settings: &Settings) -> String {
    let recent = session.recent(limit);
    if recent.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let rows: Vec<_> = recent
        .into_iter()
        .map(|txn| TransactionRow::from_transaction(txn, settings))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));
    format!("{}\n", table)
}

/// Falls back to a fixed format when the configured one is invalid
fn format_when(txn: &Transaction, date_format: &str) -> String {
    let mut when = String::new();
    if write!(when, "{}", txn.created_at.format(date_format)).is_err() {
        return txn.created_at.format("%d/%m %H:%M").to_string();
    }
    when
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
