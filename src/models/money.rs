//! Money type for representing currency amounts
//!
//! Internally stores amounts in centavos (i64) to avoid floating-point
//! precision issues. Parsing and formatting follow the pt-BR convention:
//! period as thousands separator, comma as decimal separator.
//!
//! Arithmetic saturates at the bounds of i64 instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Represents a monetary amount stored as centavos (hundredths of a real)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from centavos
    ///
    /// # Examples
    /// ```
    /// use vibepay::models::Money;
    /// let amount = Money::from_cents(7550); // R$ 75,50
    /// assert_eq!(amount.units(), 75);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and centavos
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in centavos
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the centavos portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// A percentage of this amount, rounded half away from zero to the centavo
    ///
    /// # Examples
    /// ```
    /// use vibepay::models::Money;
    /// assert_eq!(Money::from_cents(50_000).percent(10), Money::from_cents(5_000));
    /// assert_eq!(Money::from_cents(1_005).percent(10), Money::from_cents(101));
    /// ```
    pub fn percent(&self, pct: u32) -> Self {
        let scaled = self.0 as i128 * pct as i128;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Self(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Parse an amount written the pt-BR way
    ///
    /// Every `.` is a thousands separator and is dropped; the first `,` is the
    /// decimal separator. Reading stops at the first character that cannot
    /// continue the number, so `"1,250,00"` reads as `1.25`. Fraction digits
    /// beyond the second round half-up. A leading `-` and an `R$` marker are
    /// accepted.
    ///
    /// Accepts: "75", "R$75", "75,50", "1.250,00", "-50"
    pub fn parse_br(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = strip_currency_marker(s);

        let normalized = s.replace('.', "").replacen(',', ".", 1);
        let mut chars = normalized.chars().peekable();

        let mut units: i64 = 0;
        let mut int_digits = 0usize;
        while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
            units = units
                .checked_mul(10)
                .and_then(|v| v.checked_add(d as i64))
                .ok_or_else(|| MoneyParseError::Overflow(original.to_string()))?;
            int_digits += 1;
            chars.next();
        }

        if int_digits == 0 {
            return Err(MoneyParseError::InvalidFormat(original.to_string()));
        }

        let mut fraction = Vec::new();
        if chars.peek() == Some(&'.') {
            chars.next();
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                fraction.push(d as i64);
                chars.next();
            }
        }

        let mut cents = fraction.first().copied().unwrap_or(0) * 10
            + fraction.get(1).copied().unwrap_or(0);
        if fraction.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyParseError::Overflow(original.to_string()))?;

        let amount = Self(total);
        Ok(if negative { -amount } else { amount })
    }

    /// Format with a currency symbol, grouping thousands with `.`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{} {},{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn strip_currency_marker(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0].eq_ignore_ascii_case(&b'r') && bytes[1] == b'$' {
        s[2..].trim_start()
    } else {
        s
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("R$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Overflow(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::Overflow(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
