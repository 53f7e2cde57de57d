pub mod decimal_codec;
pub mod normalizer;

pub use decimal_codec::{
    format_money, format_money_with, is_canonical_number, parse_money_text, rate_value,
};
pub use normalizer::{is_valid_money_format, normalize_money_input, parse_money_input};
