//! Parsing and formatting between canonical money text and `BigDecimal`.
//!
//! Arithmetic happens on unrounded values kept to the working precision;
//! rounding to a fixed scale is applied only by [`format_money`] when a figure
//! is presented.

use bigdecimal::{num_bigint::BigInt, BigDecimal, Signed};
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::money::models::{check_scale, MoneyText, RoundingMode};

/// True when `text` matches `-?\d+(\.\d+)?` (ASCII digits only)
pub fn is_canonical_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Parses canonical text into an exact decimal.
///
/// No normalization is applied: `"1,5"` or `" 1"` fail here. Any canonical
/// text is accepted whatever its length, and its value is kept exactly.
pub fn parse_money_text(text: &str) -> Result<BigDecimal> {
    if !is_canonical_number(text) {
        return Err(AppError::invalid_number(text));
    }

    text.parse::<BigDecimal>()
        .map_err(|_| AppError::invalid_number(text))
}

/// Rounds `value` to `scale` fractional digits and renders it canonically.
///
/// Always emits exactly `scale` digits after the point (zero padded).
pub fn format_money_with(
    value: &BigDecimal,
    scale: u32,
    rounding: RoundingMode,
) -> Result<MoneyText> {
    let scale = check_scale(scale)?;

    // BigDecimal has no signed zero, so -0.001 renders as "0.00" and never as
    // "-0.00". Keep it that way: a signed zero would not compare equal to the
    // same amount formatted elsewhere as "0.00".
    let rounded = value.with_scale_round(i64::from(scale), rounding.strategy());

    let (mantissa, _) = rounded.abs().into_bigint_and_exponent();
    let mut digits = mantissa.to_string();
    let scale = scale as usize;
    if digits.len() <= scale {
        digits.insert_str(0, &"0".repeat(scale + 1 - digits.len()));
    }

    let (whole, fraction) = digits.split_at(digits.len() - scale);
    let mut text = String::with_capacity(digits.len() + 2);
    if rounded.is_negative() {
        text.push('-');
    }
    text.push_str(whole);
    if scale > 0 {
        text.push('.');
        text.push_str(fraction);
    }

    Ok(MoneyText::from_parts(text, rounded))
}

/// Exact `BigDecimal` for a percentage rate received as a `Decimal`
pub fn rate_value(rate: Decimal) -> BigDecimal {
    BigDecimal::new(BigInt::from(rate.mantissa()), i64::from(rate.scale()))
}

/// [`format_money_with`] using half-away-from-zero rounding
pub fn format_money(value: &BigDecimal, scale: u32) -> Result<MoneyText> {
    format_money_with(value, scale, RoundingMode::HalfAwayFromZero)
}
