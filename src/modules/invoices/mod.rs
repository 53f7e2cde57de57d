pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    InvoiceCalculation, InvoiceDraft, InvoiceLineBody, InvoiceLineInput, InvoiceLineResult,
    InvoiceTotals,
};
pub use services::LineCalculator;
