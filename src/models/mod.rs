//! Core data models for VibePay
//!
//! Money, transactions, categories, savings goals and the session that holds
//! them.

pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod session;
pub mod transaction;

pub use category::Category;
pub use goal::Goal;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use session::{Session, Totals};
pub use transaction::{Transaction, TransactionType, DEFAULT_DESCRIPTION};
