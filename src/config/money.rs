use crate::core::{AppError, Result};
use crate::modules::money::models::{MoneyPolicy, RoundingMode};
use std::env;

/// Rounding, precision and scale settings for every calculation in the process
#[derive(Debug, Clone, Copy)]
pub struct MoneyConfig {
    pub rounding: RoundingMode,
    pub precision: u64,
    pub amount_scale: u32,
    pub quantity_scale: u32,
    pub unit_price_scale: u32,
}

impl MoneyConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = MoneyPolicy::default();

        Ok(MoneyConfig {
            rounding: match env::var("MONEY_ROUNDING") {
                Ok(value) => value.parse()?,
                Err(_) => defaults.rounding,
            },
            precision: match env::var("MONEY_PRECISION") {
                Ok(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid MONEY_PRECISION".into()))?,
                Err(_) => defaults.precision,
            },
            amount_scale: scale_from_env("MONEY_AMOUNT_SCALE", defaults.amount_scale)?,
            quantity_scale: scale_from_env("MONEY_QUANTITY_SCALE", defaults.quantity_scale)?,
            unit_price_scale: scale_from_env(
                "MONEY_UNIT_PRICE_SCALE",
                defaults.unit_price_scale,
            )?,
        })
    }

    pub fn policy(&self) -> MoneyPolicy {
        MoneyPolicy {
            rounding: self.rounding,
            precision: self.precision,
            amount_scale: self.amount_scale,
            quantity_scale: self.quantity_scale,
            unit_price_scale: self.unit_price_scale,
        }
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        let policy = MoneyPolicy::default();
        Self {
            rounding: policy.rounding,
            precision: policy.precision,
            amount_scale: policy.amount_scale,
            quantity_scale: policy.quantity_scale,
            unit_price_scale: policy.unit_price_scale,
        }
    }
}

fn scale_from_env(key: &str, default: u32) -> Result<u32> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}
