//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the engine and the
//! storage layer. Handlers write to any `io::Write` so they can be tested
//! without a terminal.

pub mod chat;
pub mod view;

pub use chat::{handle_chat, handle_say};
pub use view::{handle_goals, handle_reset, handle_summary, handle_transactions};
