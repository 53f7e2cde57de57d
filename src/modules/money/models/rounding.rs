// Rounding policy shared by every monetary calculation.
//
// The backend system of record rounds with MidpointRounding.AwayFromZero at
// F2 for amounts, F3 for quantities and F4 for unit prices. Those are the
// defaults here; alternate policies exist so calculations can be exercised
// under other strategies without touching process-wide state.
//
// Intermediate results are kept to `precision` significant digits, not to a
// fixed number of fractional places, so small values keep their digits too.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

use crate::core::{AppError, Result};

/// Largest presentation scale accepted from callers
pub const MAX_SCALE: u32 = 28;

/// Fewest significant digits intermediate arithmetic may keep
pub const WORKING_PRECISION: u64 = 28;

/// Strategy applied when a value is cut down to its presentation scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 0.5 rounds away from zero (1.005 -> 1.01, -1.005 -> -1.01)
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding (1.005 -> 1.00, 1.015 -> 1.02)
    HalfEven,
    /// 0.5 rounds toward zero (1.005 -> 1.00)
    HalfTowardZero,
    /// Truncate
    TowardZero,
    /// Any remainder rounds away from zero
    AwayFromZero,
}

impl RoundingMode {
    pub fn strategy(&self) -> bigdecimal::RoundingMode {
        match self {
            RoundingMode::HalfAwayFromZero => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
            RoundingMode::HalfTowardZero => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::TowardZero => bigdecimal::RoundingMode::Down,
            RoundingMode::AwayFromZero => bigdecimal::RoundingMode::Up,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::HalfAwayFromZero => "half_away_from_zero",
            RoundingMode::HalfEven => "half_even",
            RoundingMode::HalfTowardZero => "half_toward_zero",
            RoundingMode::TowardZero => "toward_zero",
            RoundingMode::AwayFromZero => "away_from_zero",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "half_away_from_zero" | "half_up" => Ok(RoundingMode::HalfAwayFromZero),
            "half_even" | "bankers" => Ok(RoundingMode::HalfEven),
            "half_toward_zero" | "half_down" => Ok(RoundingMode::HalfTowardZero),
            "toward_zero" | "down" => Ok(RoundingMode::TowardZero),
            "away_from_zero" | "up" => Ok(RoundingMode::AwayFromZero),
            other => Err(AppError::Configuration(format!(
                "Invalid rounding mode: {}",
                other
            ))),
        }
    }
}

/// Working precision, scales and rounding used by every calculation.
///
/// Built once at startup and handed to the calculators by value; it is never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyPolicy {
    pub rounding: RoundingMode,
    /// Significant digits kept by each intermediate operation
    pub precision: u64,
    /// Scale of monetary amounts (net, VAT, totals)
    pub amount_scale: u32,
    /// Scale of quantities in outbound line bodies
    pub quantity_scale: u32,
    /// Scale of unit prices in outbound line bodies
    pub unit_price_scale: u32,
}

impl MoneyPolicy {
    pub fn new(rounding: RoundingMode, amount_scale: u32) -> Result<Self> {
        let policy = Self {
            rounding,
            amount_scale,
            ..Self::default()
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = precision;
        self
    }

    /// Rounds an intermediate result to the working precision.
    ///
    /// Digits are counted from the first significant one, so 0.00499... keeps
    /// as many digits as 4.99... does.
    pub fn working(&self, value: BigDecimal) -> BigDecimal {
        let digits = NonZeroU64::new(self.precision).unwrap_or(NonZeroU64::MIN);
        value.with_precision_round(digits, self.rounding.strategy())
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision < WORKING_PRECISION {
            return Err(AppError::Configuration(format!(
                "precision must be at least {} significant digits, got {}",
                WORKING_PRECISION, self.precision
            )));
        }

        for (name, scale) in [
            ("amount", self.amount_scale),
            ("quantity", self.quantity_scale),
            ("unit price", self.unit_price_scale),
        ] {
            check_scale(scale).map_err(|_| {
                AppError::Configuration(format!(
                    "{} scale must be at most {}, got {}",
                    name, MAX_SCALE, scale
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for MoneyPolicy {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfAwayFromZero,
            precision: WORKING_PRECISION,
            amount_scale: 2,
            quantity_scale: 3,
            unit_price_scale: 4,
        }
    }
}

/// Rejects presentation scales beyond [`MAX_SCALE`]
pub fn check_scale(scale: u32) -> Result<u32> {
    if scale > MAX_SCALE {
        return Err(AppError::validation(format!(
            "scale must be at most {}, got {}",
            MAX_SCALE, scale
        )));
    }
    Ok(scale)
}
