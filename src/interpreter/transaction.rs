//! Transaction extraction from free text
//!
//! "gastei R$75 com mercado" -> 75,00 / expense / Alimentação / "gastei com mercado"

use lazy_static::lazy_static;
use regex::Regex;

use super::keywords::{
    contains_any, first_match, CATEGORY_KEYWORDS, INCOME_CATEGORY_KEYWORDS, INCOME_KEYWORDS,
    INVESTMENT_KEYWORDS,
};
use crate::models::{Category, Money, Transaction, TransactionType, DEFAULT_DESCRIPTION};

lazy_static! {
    /// First number in the message, optionally preceded by `R$` and a sign
    static ref AMOUNT: Regex = Regex::new(r"(?i)(?:r\$\s*)?(-?[0-9]+[0-9.,]*)")
        .expect("amount pattern is valid");
}

/// A transaction read from a message, not yet stamped with id and time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction {
    pub amount: Money,
    pub kind: TransactionType,
    pub category: Category,
    pub description: String,
}

impl ParsedTransaction {
    /// Give the parsed values an id and a timestamp
    pub fn into_transaction(self) -> Transaction {
        Transaction::new(self.amount, self.kind, self.category, self.description)
    }
}

/// Read a transaction out of `text`
///
/// Returns `None` when the message holds no usable number.
pub fn parse_transaction(text: &str) -> Option<ParsedTransaction> {
    let found = AMOUNT.captures(text)?;
    let whole = found.get(0)?;
    let number = found.get(1)?;

    let amount = match Money::parse_br(number.as_str()) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::debug!(token = number.as_str(), error = %e, "amount not usable");
            return None;
        }
    };

    let remainder = format!("{} {}", &text[..whole.start()], &text[whole.end()..]);
    let description = remainder.split_whitespace().collect::<Vec<_>>().join(" ");

    let lowered = text.to_lowercase();
    let kind = detect_type(&lowered);
    let category = detect_category(&lowered, kind);

    Some(ParsedTransaction {
        amount,
        kind,
        category,
        description: if description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description
        },
    })
}

/// Income wins over investment; anything else is an expense
pub fn detect_type(lowered: &str) -> TransactionType {
    if contains_any(lowered, INCOME_KEYWORDS) {
        TransactionType::Income
    } else if contains_any(lowered, INVESTMENT_KEYWORDS) {
        TransactionType::Investment
    } else {
        TransactionType::Expense
    }
}

/// Pick the category for a transaction of the given type
pub fn detect_category(lowered: &str, kind: TransactionType) -> Category {
    let table = if kind.is_income() {
        INCOME_CATEGORY_KEYWORDS
    } else {
        CATEGORY_KEYWORDS
    };
    first_match(lowered, table).unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedTransaction {
        parse_transaction(text).unwrap()
    }

    #[test]
    fn test_expense_at_market() {
        let parsed = parse("gastei R$75 com mercado");
        assert_eq!(parsed.kind, TransactionType::Expense);
        assert_eq!(parsed.category, Category::Food);
        assert_eq!(parsed.amount, Money::from_cents(7500));
        assert_eq!(parsed.description, "gastei com mercado");
    }

    #[test]
    fn test_freelance_income() {
        let parsed = parse("recebi R$500 de freelance");
        assert_eq!(parsed.kind, TransactionType::Income);
        assert_eq!(parsed.category, Category::Freelance);
        assert_eq!(parsed.amount, Money::from_cents(50_000));
    }

    #[test]
    fn test_investment_falls_back_to_other() {
        let parsed = parse("investi 200 no tesouro");
        assert_eq!(parsed.kind, TransactionType::Investment);
        assert_eq!(parsed.amount, Money::from_cents(20_000));
        assert_eq!(parsed.category, Category::Other);
        assert_eq!(parsed.description, "investi no tesouro");
    }

    #[test]
    fn test_amount_formats() {
        assert_eq!(parse("gastei 75,50 no almoço").amount.cents(), 7550);
        assert_eq!(parse("paguei 1.250,00 de aluguel").amount.cents(), 125_000);
        assert_eq!(parse("gastei r$ 12 no uber").amount.cents(), 1200);
    }

    #[test]
    fn test_salary_income() {
        let parsed = parse("Recebi meu SALÁRIO de 3.500");
        assert_eq!(parsed.kind, TransactionType::Income);
        assert_eq!(parsed.category, Category::Salary);
        assert_eq!(parsed.amount.cents(), 350_000);
    }

    #[test]
    fn test_income_without_known_source() {
        let parsed = parse("ganhei 50 da minha avó");
        assert_eq!(parsed.kind, TransactionType::Income);
        assert_eq!(parsed.category, Category::Other);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        assert_eq!(parse("Gastei 30 no CINEMA").category, Category::Leisure);
        assert_eq!(parse("40 na FARMÁCIA").category, Category::Health);
    }

    #[test]
    fn test_category_scans_the_whole_message() {
        // the amount itself can carry the Transport keyword "99"
        let parsed = parse("corrida no 99 por 18 reais");
        assert_eq!(parsed.amount.cents(), 9900);
        assert_eq!(parsed.category, Category::Transport);
        assert_eq!(parsed.description, "corrida no por 18 reais");

        assert_eq!(parse("gastei 199 em roupas").category, Category::Transport);
        assert_eq!(parse("gastei 75 em roupas").category, Category::Other);
    }

    #[test]
    fn test_unmatched_expense_is_other() {
        assert_eq!(parse("gastei 80 em presentes").category, Category::Other);
    }

    #[test]
    fn test_only_amount_gets_default_description() {
        let parsed = parse("R$ 42");
        assert_eq!(parsed.description, DEFAULT_DESCRIPTION);
        assert_eq!(parsed.kind, TransactionType::Expense);
    }

    #[test]
    fn test_negative_amount_passes_through() {
        let parsed = parse("gastei -50 no mercado");
        assert_eq!(parsed.amount.cents(), -5000);
        assert_eq!(parsed.category, Category::Food);
    }

    #[test]
    fn test_no_number() {
        assert!(parse_transaction("bom dia").is_none());
        assert!(parse_transaction("gastei muito no mercado").is_none());
    }

    #[test]
    fn test_overflowing_number() {
        assert!(parse_transaction("gastei 99999999999999999999 no mercado").is_none());
    }

    #[test]
    fn test_into_transaction() {
        let txn = parse("gastei R$75 com mercado").into_transaction();
        assert_eq!(txn.amount.cents(), 7500);
        assert_eq!(txn.category, Category::Food);
        assert_eq!(txn.description, "gastei com mercado");
    }
}
