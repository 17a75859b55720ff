//! Session state
//!
//! The whole state of one user's chat: logged transactions, active goals
//! and when the session began. Sessions are treated as values; operations
//! that change them return a new session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::Category;
use super::goal::Goal;
use super::money::Money;
use super::transaction::{Transaction, TransactionType};

/// Running totals over a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income transactions
    pub income: Money,
    /// Sum of every non-income transaction (expenses and investments)
    pub expense: Money,
}

impl Totals {
    /// income - expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// A single user's chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Transactions in the order they were logged
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,

    /// Active savings goals
    #[serde(default = "Goal::default_set", deserialize_with = "null_as_default_goals")]
    pub goals: Vec<Goal>,

    /// When this session began
    #[serde(default = "Utc::now", deserialize_with = "null_as_now")]
    pub created_at: DateTime<Utc>,
}

// A stored `null` falls back the same way a missing field does.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Transaction>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_goals<'de, D>(deserializer: D) -> Result<Vec<Goal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Goal>>::deserialize(deserializer)?.unwrap_or_else(Goal::default_set))
}

fn null_as_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.unwrap_or_else(Utc::now))
}

impl Default for Session {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            goals: Goal::default_set(),
            created_at: Utc::now(),
        }
    }
}

impl Session {
    /// Return this session with one more transaction appended
    pub fn with_transaction(mut self, txn: Transaction) -> Self {
        self.transactions.push(txn);
        self
    }

    /// Income and expense totals over all transactions
    pub fn totals(&self) -> Totals {
        self.transactions
            .iter()
            .fold(Totals::default(), |mut acc, txn| {
                if txn.is_income() {
                    acc.income += txn.amount;
                } else {
                    acc.expense += txn.amount;
                }
                acc
            })
    }

    /// Sum of transactions of one category and type
    pub fn total_for(&self, category: Category, kind: TransactionType) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.category == category && t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Most recent transactions first, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.transactions.iter().rev().take(limit).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
