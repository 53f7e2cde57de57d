pub mod invoice;
pub mod line;
pub mod line_body;

pub use invoice::{InvoiceCalculation, InvoiceDraft, InvoiceTotals};
pub use line::{InvoiceLineInput, InvoiceLineResult};
pub use line_body::InvoiceLineBody;
