use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::invoices::models::{InvoiceLineInput, InvoiceLineResult};
use crate::modules::money::models::{MoneyPolicy, MoneyText};
use crate::modules::money::services::format_money_with;

/// Lines of an invoice draft being previewed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDraft {
    #[serde(default)]
    pub lines: Vec<InvoiceLineInput>,
}

/// Invoice-level sums, matching the backend invoice DTO totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub total_line_gross: MoneyText,
    pub total_discount: MoneyText,
    pub total_net: MoneyText,
    pub total_vat: MoneyText,
    pub total_withholding: MoneyText,
    pub total_gross: MoneyText,
    pub grand_total: MoneyText,
}

impl InvoiceTotals {
    /// Sums the already-rounded line figures.
    ///
    /// Totals always equal the sum of what each line displays, the same way
    /// the backend sums its stored F2 line amounts.
    pub fn from_lines(lines: &[InvoiceLineResult], policy: &MoneyPolicy) -> Result<Self> {
        Ok(Self {
            total_line_gross: sum_field(lines, policy, "lineGross", |l| &l.line_gross)?,
            total_discount: sum_field(lines, policy, "discount", |l| &l.discount)?,
            total_net: sum_field(lines, policy, "net", |l| &l.net)?,
            total_vat: sum_field(lines, policy, "vat", |l| &l.vat)?,
            total_withholding: sum_field(lines, policy, "withholding", |l| &l.withholding)?,
            total_gross: sum_field(lines, policy, "gross", |l| &l.gross)?,
            grand_total: sum_field(lines, policy, "grandTotal", |l| &l.grand_total)?,
        })
    }
}

fn sum_field(
    lines: &[InvoiceLineResult],
    policy: &MoneyPolicy,
    name: &str,
    field: fn(&InvoiceLineResult) -> &MoneyText,
) -> Result<MoneyText> {
    let total = lines
        .iter()
        .fold(BigDecimal::zero(), |acc, line| policy.working(acc + field(line).value()));

    tracing::trace!(field = name, total = %total, "Summed invoice lines");
    format_money_with(&total, policy.amount_scale, policy.rounding)
}

/// Per-line results plus invoice totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCalculation {
    pub lines: Vec<InvoiceLineResult>,
    pub totals: InvoiceTotals,
}
