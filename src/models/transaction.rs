//! Transaction model
//!
//! Transactions are created once from a chat message and never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Description used when nothing is left of the message after removing the amount
pub const DEFAULT_DESCRIPTION: &str = "Movimento registrado";

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
    Investment,
}

impl TransactionType {
    /// Money coming in
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "receita"),
            Self::Expense => write!(f, "gasto"),
            Self::Investment => write!(f, "investimento"),
        }
    }
}

/// A logged income, expense or investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount as written by the user (sign is kept, never interpreted)
    pub amount: Money,

    /// Income, expense or investment
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Budget category
    #[serde(default)]
    pub category: Category,

    /// The message text without the amount
    #[serde(default)]
    pub description: String,

    /// When the transaction was logged
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction stamped with the current time
    pub fn new(
        amount: Money,
        kind: TransactionType,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description
        };

        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category,
            description,
            created_at: Utc::now(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Sign shown next to the amount: `+` for income, `-` otherwise
    pub fn sign(&self) -> &'static str {
        if self.is_income() {
            "+"
        } else {
            "-"
        }
    }
}
