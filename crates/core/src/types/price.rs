//! Type-safe price representation using decimal arithmetic.
//!
//! Prices arrive as text in catalog rows and must never be negative, so the
//! constructors are fallible. Arithmetic stays in [`rust_decimal::Decimal`]
//! to avoid float rounding in totals.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when constructing or parsing a [`Price`].
#[derive(Debug, Error)]
pub enum PriceError {
    /// The raw value did not parse as a decimal number.
    #[error("price is not a number: {0:?}")]
    NotANumber(String),

    /// The value parsed but is negative.
    #[error("price is negative: {0}")]
    Negative(Decimal),

    /// The currency code is not one we know.
    #[error("unknown currency: {0:?}")]
    UnknownCurrency(String),
}

/// A non-negative price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rubles, not kopecks).
    amount: Decimal,
    /// Currency of the amount.
    currency: Currency,
}

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self { amount, currency })
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Parse a price from raw catalog text.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] if the trimmed text is not a
    /// decimal number, or [`PriceError::Negative`] if it is below zero.
    pub fn parse(raw: &str, currency: Currency) -> Result<Self, PriceError> {
        let trimmed = raw.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| PriceError::NotANumber(trimmed.to_owned()))?;
        Self::new(amount, currency)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of the amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// This price multiplied by a quantity (for line totals).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency: self.currency,
        }
    }
}

/// Adding prices assumes a single-currency session; the catalog stamps every
/// item with the configured currency, so mixed sums cannot occur in practice.
impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            amount: self.amount + rhs.amount,
            currency: self.currency,
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "150 ₽", trailing zeros dropped
        write!(f, "{} {}", self.amount.normalize(), self.currency.symbol())
    }
}

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Rub => "₽",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Rub => "RUB",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl FromStr for Currency {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RUB" => Ok(Self::Rub),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            other => Err(PriceError::UnknownCurrency(other.to_owned())),
        }
    }
}
