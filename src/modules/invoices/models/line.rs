// Invoice line value objects.
//
// Monetary fields arrive as text exactly as a form field or backend DTO holds
// them; rates arrive as plain percentages (20 = 20%). Results are canonical
// money text at the amount scale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::money::models::MoneyText;

/// Raw inputs for a single invoice line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineInput {
    #[serde(default)]
    pub qty: Option<String>,

    #[serde(default)]
    pub unit_price: Option<String>,

    /// VAT percentage; absent means 0
    #[serde(default)]
    pub vat_rate: Decimal,

    /// Used only when no non-zero discount amount is given
    #[serde(default)]
    pub discount_rate: Option<Decimal>,

    /// Takes priority over `discount_rate` when non-zero
    #[serde(default)]
    pub discount_amount: Option<String>,

    /// Percentage of the VAT that is withheld
    #[serde(default)]
    pub withholding_rate: Option<Decimal>,
}

impl InvoiceLineInput {
    pub fn new(qty: impl Into<String>, unit_price: impl Into<String>, vat_rate: Decimal) -> Self {
        Self {
            qty: Some(qty.into()),
            unit_price: Some(unit_price.into()),
            vat_rate,
            ..Self::default()
        }
    }

    pub fn with_discount_rate(mut self, rate: Decimal) -> Self {
        self.discount_rate = Some(rate);
        self
    }

    pub fn with_discount_amount(mut self, amount: impl Into<String>) -> Self {
        self.discount_amount = Some(amount.into());
        self
    }

    pub fn with_withholding_rate(mut self, rate: Decimal) -> Self {
        self.withholding_rate = Some(rate);
        self
    }
}

/// Derived figures for one line, each rounded independently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineResult {
    /// qty × unitPrice
    pub line_gross: MoneyText,
    pub discount: MoneyText,
    /// lineGross − discount
    pub net: MoneyText,
    pub vat: MoneyText,
    pub withholding: MoneyText,
    /// net + vat
    pub gross: MoneyText,
    /// gross − withholding
    pub grand_total: MoneyText,
}
