//! VibePay - conversational finance log
//!
//! Type what happened to your money in plain Portuguese ("gastei R$75 com
//! mercado", "recebi R$500 de freelance") and VibePay logs it, categorizes
//! it and answers with a short tip. Ask "quanto gastei?" for a summary or
//! about your "metas" for savings goals.
//!
//! # Architecture
//!
//! - `interpreter`: intent classification and transaction extraction (pure)
//! - `engine`: applies a message to a session and builds the replies (pure)
//! - `models`: money, transactions, categories, goals, the session
//! - `storage`: key-value store and session persistence
//! - `display`: terminal formatting
//! - `config`: paths and settings
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```
//! use vibepay::engine::{handle_message, EngineConfig};
//! use vibepay::models::{Category, Session};
//!
//! let outcome = handle_message(Session::default(), "gastei R$75 com mercado", &EngineConfig::default());
//! assert_eq!(outcome.session.transactions[0].category, Category::Food);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod interpreter;
pub mod models;
pub mod storage;

pub use error::{VibepayError, VibepayResult};
