//! Message interpreter
//!
//! Turns one line of free text into an [`Intent`]. Detection is ordered and
//! the first match wins:
//!
//! 1. reset keywords
//! 2. summary question (a question word *and* a finance word)
//! 3. goal keywords
//! 4. a transaction, when the text holds a usable amount
//! 5. otherwise unrecognized
//!
//! Everything here is pure: no I/O, no clock, no session access.

pub mod keywords;
pub mod transaction;

use lazy_static::lazy_static;
use regex::Regex;

use keywords::{contains_any, FINANCE_KEYWORDS, GOAL_KEYWORDS, QUESTION_KEYWORDS, RESET_KEYWORDS};

pub use transaction::{parse_transaction, ParsedTransaction};

lazy_static! {
    /// "... em alimentação?" / "... sobre lazer?"
    static ref CATEGORY_QUESTION: Regex = Regex::new(r"(?i)\b(?:em|sobre)\s+(\p{L}+)\s*\?")
        .expect("category question pattern is valid");
}

/// What a summary question asks about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryQuery {
    /// Income, expense and balance over the whole session
    Overall,
    /// Expenses in the named category, as the user wrote it
    Category(String),
}

/// The coarse classification of one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Reset,
    Summary(SummaryQuery),
    Goals,
    Transaction(ParsedTransaction),
    Unrecognized,
}

impl Intent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Summary(_) => "summary",
            Self::Goals => "goals",
            Self::Transaction(_) => "transaction",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Classify one line of user text
pub fn classify(text: &str) -> Intent {
    let text = text.trim();
    let lowered = text.to_lowercase();

    if is_reset(&lowered) {
        return Intent::Reset;
    }

    if is_summary_question(&lowered) {
        return Intent::Summary(summary_query(&lowered));
    }

    if is_goal_question(&lowered) {
        return Intent::Goals;
    }

    match parse_transaction(text) {
        Some(parsed) => Intent::Transaction(parsed),
        None => Intent::Unrecognized,
    }
}

fn is_reset(lowered: &str) -> bool {
    contains_any(lowered, RESET_KEYWORDS)
}

fn is_summary_question(lowered: &str) -> bool {
    contains_any(lowered, QUESTION_KEYWORDS) && contains_any(lowered, FINANCE_KEYWORDS)
}

fn is_goal_question(lowered: &str) -> bool {
    contains_any(lowered, GOAL_KEYWORDS)
}

fn summary_query(lowered: &str) -> SummaryQuery {
    CATEGORY_QUESTION
        .captures(lowered)
        .and_then(|c| c.get(1))
        .map(|word| SummaryQuery::Category(word.as_str().to_string()))
        .unwrap_or(SummaryQuery::Overall)
}
