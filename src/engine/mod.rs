//! Session engine
//!
//! Applies one message to a session: classify, compute the replies, return
//! the updated session. The session is passed in by value and handed back,
//! so callers decide what to persist.

pub mod replies;

use tracing::debug;

use crate::interpreter::{self, Intent};
use crate::models::{Money, Session};

/// Thresholds and formatting used when building replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Currency symbol placed before amounts
    pub currency_symbol: String,
    /// Food spending above this triggers a budget alert
    pub food_alert_threshold: Money,
    /// Share of each income suggested for the reserve
    pub reserve_percent: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            food_alert_threshold: Money::from_units_cents(400, 0),
            reserve_percent: 10,
        }
    }
}

impl EngineConfig {
    /// Format an amount with the configured symbol
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

/// Result of handling one message
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The session after the message
    pub session: Session,
    /// Bot messages to show, in order
    pub replies: Vec<String>,
    /// Whether the session differs from the one passed in
    pub changed: bool,
    /// Whether the session was reset to its defaults
    pub reset: bool,
}

impl Outcome {
    fn unchanged(session: Session, replies: Vec<String>) -> Self {
        Self {
            session,
            replies,
            changed: false,
            reset: false,
        }
    }

    fn changed(session: Session, replies: Vec<String>) -> Self {
        Self {
            session,
            replies,
            changed: true,
            reset: false,
        }
    }

    fn reset() -> Self {
        Self {
            session: Session::default(),
            replies: vec![replies::RESET_DONE.to_string()],
            changed: true,
            reset: true,
        }
    }
}

/// Handle one line of user text
///
/// Blank input is ignored: no replies and the session comes back untouched.
pub fn handle_message(session: Session, text: &str, config: &EngineConfig) -> Outcome {
    let text = text.trim();
    if text.is_empty() {
        return Outcome::unchanged(session, Vec::new());
    }

    let intent = interpreter::classify(text);
    debug!(intent = intent.name(), "message classified");
    apply(session, intent, config)
}

/// Apply an already classified intent
pub fn apply(session: Session, intent: Intent, config: &EngineConfig) -> Outcome {
    match intent {
        Intent::Reset => Outcome::reset(),
        Intent::Summary(query) => {
            let answer = replies::summary_answer(&session, &query, config);
            Outcome::unchanged(session, vec![answer])
        }
        Intent::Goals => {
            let list = replies::goals_list(&session.goals);
            Outcome::unchanged(session, vec![list])
        }
        Intent::Transaction(parsed) => {
            let txn = parsed.into_transaction();
            debug!(
                id = %txn.id,
                amount = txn.amount.cents(),
                kind = ?txn.kind,
                category = %txn.category,
                "transaction logged"
            );
            let session = session.with_transaction(txn.clone());
            let replies = vec![
                replies::transaction_confirmation(&txn, config),
                replies::insight(&session, &txn, config),
            ];
            Outcome::changed(session, replies)
        }
        Intent::Unrecognized => {
            Outcome::unchanged(session, vec![replies::NOT_UNDERSTOOD.to_string()])
        }
    }
}
