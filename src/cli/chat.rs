//! Chat commands
//!
//! `chat` runs an interactive loop; `say` handles a single message. Both
//! persist the session after every message that changes it.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_bot_message;
use crate::engine::{self, replies, EngineConfig, Outcome};
use crate::error::{VibepayError, VibepayResult};
use crate::models::Session;
use crate::storage::{KeyValueStore, SessionRepository};

/// Words that end the interactive loop
const EXIT_WORDS: &[&str] = &["sair", "exit", "quit"];

/// Run one message through the engine, save if needed and print the replies
fn process<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    session: Session,
    message: &str,
    config: &EngineConfig,
    out: &mut W,
) -> VibepayResult<Outcome> {
    let outcome = engine::handle_message(session, message, config);

    if outcome.changed {
        repo.save(&outcome.session)?;
    }

    for reply in &outcome.replies {
        writeln!(out, "{}", format_bot_message(reply))?;
    }

    Ok(outcome)
}

/// Interactive chat over `input`/`out`
///
/// Ends on EOF or an exit word. A reset starts the conversation over with
/// the welcome message.
pub fn handle_chat<S, R, W>(
    repo: &SessionRepository<S>,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> VibepayResult<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let config = settings.engine_config();
    let mut session = repo.load();

    writeln!(out, "{}", format_bot_message(replies::WELCOME))?;
    out.flush()?;

    for line in input.lines() {
        let line = line.map_err(|e| VibepayError::Io(format!("Failed to read input: {}", e)))?;
        let message = line.trim();

        if EXIT_WORDS.contains(&message.to_lowercase().as_str()) {
            break;
        }

        let outcome = process(repo, session, message, &config, out)?;
        if outcome.reset {
            writeln!(out, "{}", format_bot_message(replies::WELCOME))?;
        }
        session = outcome.session;
        out.flush()?;
    }

    writeln!(out, "{}", format_bot_message("Até logo!"))?;
    Ok(())
}

/// Handle a single message
pub fn handle_say<S: KeyValueStore, W: Write>(
    repo: &SessionRepository<S>,
    settings: &Settings,
    message: &str,
    out: &mut W,
) -> VibepayResult<()> {
    if message.trim().is_empty() {
        return Err(VibepayError::Validation("Message cannot be empty".into()));
    }

    let config = settings.engine_config();
    process(repo, repo.load(), message, &config, out)?;
    Ok(())
}
