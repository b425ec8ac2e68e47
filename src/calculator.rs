//! Compound interest calculation
//!
//! All arithmetic is done on [`Decimal`] so that `1.05^10` is exact and the
//! only rounding is the final two-decimal step.

use rust_decimal::prelude::*;
use rust_decimal::MathematicalOps;
use serde::Serialize;
use tracing::debug;

use crate::error::{InterestError, Result};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Longest schedule that [`yearly_schedule`] will build.
pub const MAX_SCHEDULE_YEARS: u32 = 1000;

/// Interest accrued on `principal` at an annual `rate` (percent) compounded
/// once a year for `years` periods, rounded to two decimal places.
///
/// The rounding is applied once, after subtracting the principal from the
/// grown amount.
pub fn compute_interest(principal: Decimal, rate: Decimal, years: Decimal) -> Result<Decimal> {
    if principal.is_sign_negative() && !principal.is_zero() {
        return Err(InterestError::InvalidInput(format!(
            "principal must not be negative (got {})",
            principal
        )));
    }

    let amount = grown_amount(principal, rate, years)?;
    let interest = amount.checked_sub(principal).ok_or_else(|| {
        InterestError::Overflow(format!(
            "{} less principal {} exceeds decimal range",
            amount, principal
        ))
    })?;
    let rounded = round_to_two(interest);

    debug!(%principal, %rate, %years, %amount, %rounded, "computed interest");
    Ok(rounded)
}

/// Same as [`compute_interest`] for callers holding floats.
///
/// NaN and infinities are rejected instead of propagated.
pub fn compute_interest_f64(principal: f64, rate: f64, years: f64) -> Result<Decimal> {
    compute_interest(
        decimal_from_f64("principal", principal)?,
        decimal_from_f64("rate", rate)?,
        decimal_from_f64("years", years)?,
    )
}

/// Growth factor `(1 + rate/100)^years`.
///
/// Whole years use exact integer exponentiation. Fractional years are only
/// defined for a non-negative base.
pub fn growth_rate(rate: Decimal, years: Decimal) -> Result<Decimal> {
    if years.is_sign_negative() && !years.is_zero() {
        return Err(InterestError::InvalidInput(format!(
            "years must not be negative (got {})",
            years
        )));
    }

    let growth_as_decimal = (rate / HUNDRED)
        .checked_add(Decimal::ONE)
        .ok_or_else(|| InterestError::Overflow(format!("rate {}% is out of range", rate)))?;

    if years.fract().is_zero() {
        let exponent = years.to_i64().ok_or_else(|| {
            InterestError::Overflow(format!("{} years is out of range", years))
        })?;
        return growth_as_decimal.checked_powi(exponent).ok_or_else(|| {
            InterestError::Overflow(format!(
                "growth factor {}^{} exceeds decimal range",
                growth_as_decimal, exponent
            ))
        });
    }

    if growth_as_decimal.is_zero() || growth_as_decimal == Decimal::ONE {
        return Ok(growth_as_decimal);
    }

    if growth_as_decimal.is_sign_negative() {
        return Err(InterestError::DomainError(format!(
            "rate {}% gives a negative growth factor, which has no real value over {} years",
            rate, years
        )));
    }

    match growth_as_decimal.checked_powd(years) {
        Some(factor) => Ok(factor),
        // A shrinking factor only fails once the result is below the smallest decimal
        None if growth_as_decimal < Decimal::ONE => Ok(Decimal::ZERO),
        None => Err(InterestError::Overflow(format!(
            "growth factor {}^{} exceeds decimal range",
            growth_as_decimal, years
        ))),
    }
}

/// Round half away from zero to cents.
pub fn round_to_two(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse a user-supplied amount, rate or period count.
pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InterestError::InvalidInput(format!("{} is missing", field)));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| InterestError::InvalidInput(format!("{} is not a number: {:?}", field, raw)))
}

fn grown_amount(principal: Decimal, rate: Decimal, years: Decimal) -> Result<Decimal> {
    let factor = growth_rate(rate, years)?;
    principal.checked_mul(factor).ok_or_else(|| {
        InterestError::Overflow(format!(
            "{} grown by {} exceeds decimal range",
            principal, factor
        ))
    })
}

fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(InterestError::InvalidInput(format!(
            "{} must be a finite number (got {})",
            field, value
        )));
    }
    Decimal::try_from(value)
        .map_err(|e| InterestError::InvalidInput(format!("{} is out of range: {}", field, e)))
}

/// One calculation with its inputs, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestQuote {
    pub principal: Decimal,
    pub rate: Decimal,
    pub years: Decimal,
    pub interest: Decimal,
}

impl InterestQuote {
    pub fn calculate(principal: Decimal, rate: Decimal, years: Decimal) -> Result<Self> {
        let interest = compute_interest(principal, rate, years)?;
        Ok(Self {
            principal: principal.normalize(),
            rate: rate.normalize(),
            years: years.normalize(),
            interest,
        })
    }

    /// Amount held at the end of the period.
    pub fn final_balance(&self) -> Decimal {
        self.principal + self.interest
    }
}

/// Balance at the end of a compounding year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyBalance {
    pub year: u32,
    pub balance: Decimal,
    pub interest_to_date: Decimal,
}

/// End-of-year balances for every whole year up to `years`.
///
/// Each row is computed from the principal directly, so rounding never
/// carries from one year into the next. A fractional tail is not listed.
pub fn yearly_schedule(principal: Decimal, rate: Decimal, years: Decimal) -> Result<Vec<YearlyBalance>> {
    // Validates every input once, including the fractional tail
    compute_interest(principal, rate, years)?;

    let whole_years = years
        .trunc()
        .to_u32()
        .filter(|y| *y <= MAX_SCHEDULE_YEARS)
        .ok_or_else(|| {
            InterestError::InvalidInput(format!(
                "{} years is too long for a schedule (at most {})",
                years, MAX_SCHEDULE_YEARS
            ))
        })?;

    (1..=whole_years)
        .map(|year| {
            let interest_to_date = compute_interest(principal, rate, Decimal::from(year))?;
            let balance = principal.checked_add(interest_to_date).ok_or_else(|| {
                InterestError::Overflow(format!("balance after year {} exceeds decimal range", year))
            })?;
            Ok(YearlyBalance {
                year,
                balance,
                interest_to_date,
            })
        })
        .collect()
}
