//! Display formatting for terminal output
//!
//! The renderer side of the chat: transaction list, summary panel, goal
//! list and bot messages.

pub mod summary;
pub mod transaction;

pub use summary::{format_goals, format_summary};
pub use transaction::format_recent_transactions;

/// Prefix a bot reply for the chat transcript
pub fn format_bot_message(message: &str) -> String {
    let mut lines = message.lines();
    let mut output = match lines.next() {
        Some(first) => format!("bot> {}", first),
        None => "bot>".to_string(),
    };
    for line in lines {
        output.push_str("\n     ");
        output.push_str(line);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_message_single_line() {
        assert_eq!(format_bot_message("Olá!"), "bot> Olá!");
    }

    #[test]
    fn test_bot_message_indents_continuation_lines() {
        assert_eq!(
            format_bot_message("Aqui vão suas metas atuais:\n• A: b"),
            "bot> Aqui vão suas metas atuais:\n     • A: b"
        );
    }
}
