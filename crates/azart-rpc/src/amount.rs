//! Lossless conversion between whole coins and subunits.
//!
//! azartd reports balances and fees as decimal coin amounts while the
//! consensus layer counts integer subunits (10^8 per coin). Every conversion
//! here goes through [`Decimal`] so that no amount ever passes through binary
//! floating point.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::AmountError;

/// Number of subunits in one coin.
pub const SUBUNITS_PER_UNIT: i64 = 100_000_000;

/// Decimal places of a subunit relative to one coin.
pub const SUBUNIT_DECIMALS: u32 = 8;

/// Convert a coin amount into subunits, rounding half away from zero.
pub fn to_subunit(amount: Decimal) -> Result<i64, AmountError> {
    amount
        .checked_mul(Decimal::from(SUBUNITS_PER_UNIT))
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_i64())
        .ok_or_else(|| AmountError::Overflow(amount.to_string()))
}

/// Convert subunits into a coin amount. Exact for every `i64`.
pub fn to_main_unit(subunits: i64) -> Decimal {
    Decimal::new(subunits, SUBUNIT_DECIMALS)
}

/// Format `value` with exactly `precision` fractional digits.
///
/// Extra digits are cut off, not rounded, and missing ones are zero-padded.
/// At precision 0 the decimal point is omitted.
pub fn to_fixed(value: Decimal, precision: u32) -> String {
    let mut truncated = value.round_dp_with_strategy(precision, RoundingStrategy::ToZero);
    if truncated.is_zero() {
        truncated.set_sign_positive(true);
    }
    format!("{:.*}", precision as usize, truncated)
}

/// Parse a user-supplied coin amount such as `"0.00005849"`.
///
/// Inputs with more precision than a [`Decimal`] can hold are rejected
/// instead of being silently rounded.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    Decimal::from_str_exact(input.trim()).map_err(|e| AmountError::Parse {
        input: input.to_owned(),
        reason: e.to_string(),
    })
}

/// Read an amount out of a JSON number without float arithmetic.
///
/// `serde_json` keeps numbers as `f64`, whose `Display` is the shortest
/// string that round-trips, so parsing that string recovers the literal the
/// daemon sent for any amount with up to 15 significant digits.
pub(crate) fn amount_from_json(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        serde_json::Value::String(s) => parse_amount(s).ok(),
        _ => None,
    }
}
