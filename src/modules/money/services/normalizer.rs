// Turns locale-flexible user or backend text into canonical money text.
//
// Normalization only rewrites the separator and trims; it never validates.
// Grouped input such as "1.234,56" passes through and fails later at parse
// time with InvalidNumberFormat.

use bigdecimal::BigDecimal;

use crate::core::Result;
use crate::modules::money::services::decimal_codec::{is_canonical_number, parse_money_text};

/// Rewrites the first `,` to `.` and trims surrounding whitespace.
/// Absent or blank input becomes `"0"`.
pub fn normalize_money_input(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "0".to_string();
    };

    let normalized = raw.replacen(',', ".", 1);
    let normalized = normalized.trim();

    if normalized.is_empty() {
        "0".to_string()
    } else {
        normalized.to_string()
    }
}

/// Advisory check for UI feedback. Absent or empty input is valid (zero).
pub fn is_valid_money_format(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(raw) if raw.is_empty() => true,
        Some(raw) => is_canonical_number(&normalize_money_input(Some(raw))),
    }
}

/// Normalizes then parses; only genuinely empty input is read as zero
pub fn parse_money_input(raw: Option<&str>) -> Result<BigDecimal> {
    parse_money_text(&normalize_money_input(raw))
}
