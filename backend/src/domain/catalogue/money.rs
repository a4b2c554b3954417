//! Monetary amounts held as integer cents.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Errors returned when parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    /// Input was blank once trimmed.
    Empty,
    /// Input is not a plain decimal number.
    NotNumeric,
    /// Input carries a leading minus sign.
    Negative,
    /// More than two fractional digits were supplied.
    TooPrecise,
    /// The amount does not fit in the cent counter.
    Overflow,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "amount must not be empty"),
            Self::NotNumeric => write!(f, "amount must be a number"),
            Self::Negative => write!(f, "amount must not be negative"),
            Self::TooPrecise => write!(f, "amount must have at most two decimal places"),
            Self::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Non-negative amount of US dollars in cents.
///
/// # Examples
/// ```
/// use insure_backend::domain::Money;
///
/// let amount = Money::parse_decimal("1234.5").unwrap();
/// assert_eq!(amount.cents(), 123_450);
/// assert_eq!(amount.to_string(), "$1,234.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0);

    /// Build an amount from a cent count.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole dollars and cents.
    pub const fn from_dollars(dollars: u64, cents: u64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Amount in cents.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Parse a plain decimal string such as `1500`, `1500.5` or `0.99`.
    ///
    /// Thousands separators, currency symbols and exponents are rejected.
    pub fn parse_decimal(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(MoneyParseError::Negative);
        }
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
        {
            return Err(MoneyParseError::NotNumeric);
        }
        if fraction.len() > 2 {
            return Err(MoneyParseError::TooPrecise);
        }

        let dollars: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::Overflow)?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            _ => fraction.parse().map_err(|_| MoneyParseError::NotNumeric)?,
        };
        dollars
            .checked_mul(100)
            .and_then(|value| value.checked_add(cents))
            .map(Self)
            .ok_or(MoneyParseError::Overflow)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (index, digit) in dollars.chars().enumerate() {
            if index > 0 && (dollars.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}

/// Wire shape of [`Money`]: raw cents alongside the rendered label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyDto {
    #[schema(example = 120_000)]
    pub cents: u64,
    #[schema(example = "$1,200.00")]
    pub formatted: String,
}

impl From<Money> for MoneyDto {
    fn from(value: Money) -> Self {
        Self {
            cents: value.cents(),
            formatted: value.to_string(),
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MoneyDto::from(*self).serialize(serializer)
    }
}
