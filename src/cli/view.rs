//! Read-only views and reset
//!
//! Non-chat commands that show or reset the stored session.

use std::io::Write;

use crate::config::Settings;
use crate::display::{format_goals, format_recent_transactions, format_summary};
use crate::engine::replies;
use crate::error::VibepayResult;
use crate::storage::{KeyValueStore, SessionRepository};

/// Print the summary panel
pub fn handle_summary<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    settings: &Settings,
    out: &mut W,
) -> VibepayResult<()> {
    let session = repo.load();
    write!(out, "{}", format_summary(&session, settings))?;
    Ok(())
}

/// Print the most recent transactions
pub fn handle_transactions<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    settings: &Settings,
    limit: Option<usize>,
    out: &mut W,
) -> VibepayResult<()> {
    let session = repo.load();
    let limit = limit.unwrap_or(settings.recent_transactions);
    write!(out, "{}", format_recent_transactions(&session, limit, settings))?;
    Ok(())
}

/// Print the active goals
pub fn handle_goals<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    out: &mut W,
) -> VibepayResult<()> {
    let session = repo.load();
    write!(out, "{}", format_goals(&session.goals))?;
    Ok(())
}

/// Start over with a fresh session
pub fn handle_reset<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    out: &mut W,
) -> VibepayResult<()> {
    repo.reset()?;
    writeln!(out, "{}", replies::RESET_DONE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::chat::handle_say;
    use crate::storage::MemoryStore;

    fn seeded_repo() -> SessionRepository<MemoryStore> {
        let repo = SessionRepository::new(MemoryStore::new());
        let mut sink = Vec::new();
        for message in ["recebi R$500 de freelance", "gastei 75,50 no mercado"] {
            handle_say(&repo, &Settings::default(), message, &mut sink).unwrap();
        }
        repo
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> VibepayResult<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_view() {
        let repo = seeded_repo();
        let output = render(|out| handle_summary(&repo, &Settings::default(), out));
        assert!(output.contains("R$ 500,00"));
        assert!(output.contains("R$ 75,50"));
        assert!(output.contains("R$ 424,50"));
    }

    #[test]
    fn test_transactions_view_respects_limit() {
        let repo = seeded_repo();
        let output = render(|out| handle_transactions(&repo, &Settings::default(), Some(1), out));
        assert!(output.contains("gastei no mercado"));
        assert!(!output.contains("recebi de freelance"));
    }

    #[test]
    fn test_goals_view() {
        let repo = seeded_repo();
        let output = render(|out| handle_goals(&repo, out));
        assert!(output.contains("Montar reserva de emergência"));
    }

    #[test]
    fn test_reset_view() {
        let repo = seeded_repo();
        let output = render(|out| handle_reset(&repo, out));
        assert_eq!(output.trim(), replies::RESET_DONE);
        assert!(repo.load().transactions.is_empty());

        let output = render(|out| handle_transactions(&repo, &Settings::default(), None, out));
        assert_eq!(output, "Ainda sem transações\n");
    }
}
