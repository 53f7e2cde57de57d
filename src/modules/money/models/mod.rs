pub mod money_text;
pub mod rounding;

pub use money_text::MoneyText;
pub use rounding::{check_scale, MoneyPolicy, RoundingMode, MAX_SCALE, WORKING_PRECISION};
