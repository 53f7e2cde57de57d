use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::money::models::MoneyText;

/// Canonical line body for the backend create/update invoice requests.
///
/// `qty` and `unitPrice` use the quantity and unit-price scales; discounts
/// use the amount scale. Rates are sent as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineBody {
    pub qty: MoneyText,
    pub unit_price: MoneyText,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub vat_rate: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<MoneyText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<MoneyText>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub withholding_rate: Option<Decimal>,
}
