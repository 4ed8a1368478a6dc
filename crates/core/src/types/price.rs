//! Type-safe price representation using decimal arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors returned when parsing a price from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input was empty or not a decimal number.
    #[error("price must be a number")]
    NotANumber,
    /// The amount was zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
}

/// A price with currency information.
///
/// Amounts are kept in the currency's standard unit (dollars, not cents) at
/// full input precision; only the formatted output rounds to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a cent value, e.g. `Price::usd_cents(19_999)` is `$199.99`.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// Parse a strictly positive USD price from form input.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] for empty or non-numeric input and
    /// [`PriceError::NotPositive`] when the amount is `<= 0`.
    pub fn parse_positive(input: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(input.trim()).map_err(|_| PriceError::NotANumber)?;

        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        Ok(Self::new(amount, CurrencyCode::USD))
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }

    /// Format the bare amount for form inputs (e.g., "19.99").
    #[must_use]
    pub fn input_value(&self) -> String {
        format!("{:.2}", self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::usd_cents(19_999).display(), "$199.99");
        assert_eq!(Price::usd_cents(4_000).display(), "$40.00");
    }

    #[test]
    fn test_parse_positive_accepts_decimal_input() {
        let price = Price::parse_positive(" 79.99 ").unwrap();
        assert_eq!(price, Price::usd_cents(7_999));
        assert_eq!(price.input_value(), "79.99");
    }

    #[test]
    fn test_parse_positive_rejects_non_numbers() {
        assert_eq!(Price::parse_positive(""), Err(PriceError::NotANumber));
        assert_eq!(Price::parse_positive("abc"), Err(PriceError::NotANumber));
    }

    #[test]
    fn test_parse_positive_rejects_zero_and_negative() {
        assert_eq!(Price::parse_positive("0"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse_positive("-5"), Err(PriceError::NotPositive));
        assert_eq!(Price::parse_positive("-0.001"), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_parse_positive_keeps_sub_cent_amounts() {
        let tiny = Price::parse_positive("0.004").unwrap();
        assert_eq!(tiny.amount, Decimal::new(4, 3));

        let price = Price::parse_positive("19.995").unwrap();
        assert_eq!(price.amount, Decimal::new(19_995, 3));
        assert_ne!(price, Price::usd_cents(2_000));
    }

    #[test]
    fn test_other_currency_symbols() {
        let price = Price::new(Decimal::new(500, 2), CurrencyCode::GBP);
        assert_eq!(price.display(), "£5.00");
    }
}
