use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};
use crate::modules::money::services::decimal_codec::parse_money_text;

/// Canonical wire form of an amount: `.` separator, no grouping, optional
/// leading `-` (`-?\d+(\.\d+)?`).
///
/// Holds the exact decimal it denotes, so reading the value back never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MoneyText {
    text: String,
    value: BigDecimal,
}

impl MoneyText {
    /// Wraps text produced by the formatter, which is canonical by construction
    pub(crate) fn from_parts(text: String, value: BigDecimal) -> Self {
        Self { text, value }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Exact value of the text
    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    /// Number of digits after the decimal point
    pub fn scale(&self) -> usize {
        self.text
            .split_once('.')
            .map(|(_, fraction)| fraction.len())
            .unwrap_or(0)
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::str::FromStr for MoneyText {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let value = parse_money_text(s)?;
        Ok(Self {
            text: s.to_string(),
            value,
        })
    }
}

impl TryFrom<String> for MoneyText {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self> {
        let value = parse_money_text(&s)?;
        Ok(Self { text: s, value })
    }
}

impl TryFrom<&str> for MoneyText {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl From<MoneyText> for String {
    fn from(money: MoneyText) -> Self {
        money.text
    }
}

impl AsRef<str> for MoneyText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for MoneyText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl fmt::Display for MoneyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
