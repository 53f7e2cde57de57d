pub mod controllers;
pub mod models;
pub mod services;

pub use models::{MoneyPolicy, MoneyText, RoundingMode};
pub use services::{
    format_money, format_money_with, is_valid_money_format, normalize_money_input,
    parse_money_input, parse_money_text,
};
