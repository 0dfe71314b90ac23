//! Cross-rate conversion between two priced currencies

use super::error::{Error, Result, ValidationReason};
use super::prices::PriceTable;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Rounds half away from zero to two decimals and pins the scale, so the
/// textual form always shows exactly two digits.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Converts `amount` using `rate = to_price / from_price`, rounded to cents.
///
/// # Errors
///
/// Returns a validation error for a non-positive amount or price, or when
/// the result does not fit in a `Decimal`.
pub fn convert(amount: Decimal, from_price: Decimal, to_price: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(Error::validation(ValidationReason::NonPositiveAmount));
    }
    if from_price <= Decimal::ZERO || to_price <= Decimal::ZERO {
        return Err(Error::validation(ValidationReason::NonPositivePrice));
    }
    // Multiply before dividing to keep precision on small rates
    amount
        .checked_mul(to_price)
        .and_then(|v| v.checked_div(from_price))
        .map(round_money)
        .ok_or_else(|| Error::validation(ValidationReason::OutOfRange))
}

/// Parses a typed amount.
///
/// # Errors
///
/// Empty or non-numeric input is `invalid amount`; zero or negative input is
/// `non-positive amount`.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|_| Error::validation(ValidationReason::InvalidAmount))?;
    if amount <= Decimal::ZERO {
        return Err(Error::validation(ValidationReason::NonPositiveAmount));
    }
    Ok(amount)
}

/// A request to swap `amount` of `from` into `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount: Decimal,
    pub from: String,
    pub to: String,
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub amount: Decimal,
    pub from: String,
    pub to: String,
    pub result: Decimal,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {} {}", self.amount, self.from, self.result, self.to)
    }
}

impl ConversionRequest {
    pub fn new(amount: Decimal, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            amount,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Validates and prices the request against `prices`.
    ///
    /// Checks run in order: amount, identical currencies, `from` lookup, `to`
    /// lookup. The first failure is returned.
    pub fn quote(&self, prices: &PriceTable) -> Result<Quote> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::validation(ValidationReason::NonPositiveAmount));
        }
        if self.from == self.to {
            return Err(Error::validation(ValidationReason::SameCurrency));
        }
        let from_price = prices
            .get(&self.from)
            .ok_or_else(|| Error::lookup(&self.from))?;
        let to_price = prices.get(&self.to).ok_or_else(|| Error::lookup(&self.to))?;

        let result = convert(self.amount, from_price, to_price)?;
        tracing::debug!("Quoted {} {} -> {} {}", self.amount, self.from, result, self.to);
        Ok(Quote {
            amount: self.amount,
            from: self.from.clone(),
            to: self.to.clone(),
            result,
        })
    }
}
