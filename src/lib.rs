//! Monetary line-calculation engine for the accounting front-end.
//!
//! Computes invoice-line figures (net, VAT, withholding, gross, grand total)
//! with exact decimal arithmetic and the backend's half-away-from-zero
//! rounding, so both sides agree to the cent.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Result};
pub use modules::invoices;
pub use modules::invoices::{InvoiceLineInput, InvoiceLineResult, LineCalculator};
pub use modules::money;
pub use modules::money::{MoneyPolicy, MoneyText, RoundingMode};
