//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

/// Errors raised while turning backend price values into money.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The value is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),

    /// Prices cannot be negative.
    #[error("negative price: {0}")]
    Negative(String),

    /// The value does not fit in the currency's minor units.
    #[error("price out of range: {0}")]
    OutOfRange(String),

    /// The currency code is not one the store trades in.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Look up a supported store currency by its ISO code (case-insensitive).
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for anything other than `USD`,
/// `GBP` or `EUR`.
pub fn currency_from_code(code: &str) -> Result<&'static Currency, PriceError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => Ok(USD),
        "GBP" => Ok(GBP),
        "EUR" => Ok(EUR),
        _ => Err(PriceError::UnknownCurrency(code.to_string())),
    }
}

/// Parse a decimal price string (e.g. `"299.99"`) into money.
///
/// # Errors
///
/// Returns an error if the string is not a decimal number, is negative, or
/// does not fit in minor units.
pub fn parse_price(
    amount: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PriceError> {
    let value = amount
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| PriceError::Invalid(amount.to_string()))?;

    price_from_decimal(value, currency)
}

/// Convert a decimal amount into money, rounding half-to-even to the
/// currency's minor unit.
///
/// # Errors
///
/// Returns an error if the amount is negative or does not fit in minor units.
pub fn price_from_decimal(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PriceError> {
    if amount < Decimal::ZERO {
        return Err(PriceError::Negative(amount.to_string()));
    }

    let minor_units = 10_i64
        .checked_pow(currency.exponent)
        .and_then(|scale| {
            amount
                .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointNearestEven)
                .checked_mul(Decimal::from(scale))
        })
        .and_then(|value| value.to_i64())
        .ok_or_else(|| PriceError::OutOfRange(amount.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Express money as a decimal amount in major units, as the backend expects.
pub fn price_to_decimal(price: &Money<'_, Currency>) -> Decimal {
    Decimal::new(price.to_minor_units(), price.currency().exponent)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_converts_to_minor_units() -> TestResult {
        assert_eq!(parse_price("299.99", USD)?, Money::from_minor(299_99, USD));
        assert_eq!(parse_price(" 89.5 ", USD)?, Money::from_minor(89_50, USD));
        assert_eq!(parse_price("10", GBP)?, Money::from_minor(10_00, GBP));

        Ok(())
    }

    #[test]
    fn parse_price_rounds_half_to_even() -> TestResult {
        assert_eq!(parse_price("1.005", USD)?, Money::from_minor(1_00, USD));
        assert_eq!(parse_price("1.015", USD)?, Money::from_minor(1_02, USD));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_garbage() {
        let result = parse_price("ten dollars", USD);

        assert!(matches!(result, Err(PriceError::Invalid(value)) if value == "ten dollars"));
    }

    #[test]
    fn parse_price_rejects_negative() {
        assert!(matches!(
            parse_price("-1.00", USD),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn currency_lookup_is_case_insensitive() -> TestResult {
        assert_eq!(currency_from_code("usd")?, USD);
        assert_eq!(currency_from_code("EUR")?, EUR);

        Ok(())
    }

    #[test]
    fn currency_lookup_rejects_unknown_codes() {
        let result = currency_from_code("ABC");

        assert!(matches!(result, Err(PriceError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn price_to_decimal_keeps_exponent() {
        let price = Money::from_minor(389_49, USD);

        assert_eq!(price_to_decimal(&price), Decimal::new(389_49, 2));
        assert_eq!(price_to_decimal(&price).to_string(), "389.49");
    }
}
