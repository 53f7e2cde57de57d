use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{
    InvoiceCalculation, InvoiceLineBody, InvoiceLineInput, InvoiceLineResult, InvoiceTotals,
};
use crate::modules::money::models::{MoneyPolicy, MoneyText};
use crate::modules::money::services::{format_money_with, parse_money_input, rate_value};

/// Derives discount, VAT, withholding, net, gross and grand total for
/// invoice lines.
///
/// Every intermediate figure is kept to the policy's working precision and
/// left unrounded otherwise; each output field is rounded once,
/// independently, when it is formatted. Withholding is therefore taken from
/// the exact VAT, not from the displayed VAT.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCalculator {
    policy: MoneyPolicy,
}

/// Unrounded figures of one line
#[derive(Debug, Clone, PartialEq)]
struct LineFigures {
    line_gross: BigDecimal,
    discount: BigDecimal,
    net: BigDecimal,
    vat: BigDecimal,
    withholding: BigDecimal,
    gross: BigDecimal,
    grand_total: BigDecimal,
}

impl LineCalculator {
    pub fn new(policy: MoneyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MoneyPolicy {
        &self.policy
    }

    /// Calculate all derived figures of one invoice line
    ///
    /// Formulas:
    /// - lineGross = qty × unitPrice
    /// - discount = discountAmount if non-zero, else lineGross × discountRate / 100
    /// - net = lineGross − discount (may go negative)
    /// - vat = net × vatRate / 100
    /// - withholding = vat × withholdingRate / 100
    /// - gross = net + vat
    /// - grandTotal = gross − withholding
    pub fn compute(&self, input: &InvoiceLineInput) -> Result<InvoiceLineResult> {
        let figures = self.derive(input).inspect_err(|err| {
            tracing::warn!(error = %err, "Invoice line calculation rejected");
        })?;

        let result = InvoiceLineResult {
            line_gross: self.amount(&figures.line_gross)?,
            discount: self.amount(&figures.discount)?,
            net: self.amount(&figures.net)?,
            vat: self.amount(&figures.vat)?,
            withholding: self.amount(&figures.withholding)?,
            gross: self.amount(&figures.gross)?,
            grand_total: self.amount(&figures.grand_total)?,
        };

        tracing::debug!(
            line_gross = %result.line_gross,
            net = %result.net,
            vat = %result.vat,
            grand_total = %result.grand_total,
            "Calculated invoice line"
        );

        Ok(result)
    }

    /// Calculate every line of a draft and the invoice totals.
    ///
    /// The first malformed line aborts the calculation; its 1-based position
    /// is prefixed to the error message.
    pub fn compute_invoice(&self, lines: &[InvoiceLineInput]) -> Result<InvoiceCalculation> {
        let results = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                self.compute(line)
                    .map_err(|err| with_line_context(err, index + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        let totals = InvoiceTotals::from_lines(&results, &self.policy)?;

        Ok(InvoiceCalculation {
            lines: results,
            totals,
        })
    }

    /// Build the canonical request body the backend expects for this line
    pub fn line_body(&self, input: &InvoiceLineInput) -> Result<InvoiceLineBody> {
        let qty = parse_money_input(input.qty.as_deref())?;
        let unit_price = parse_money_input(input.unit_price.as_deref())?;

        let discount_amount = input
            .discount_amount
            .as_deref()
            .map(|raw| {
                parse_money_input(Some(raw))
                    .and_then(|amount| self.amount(&amount))
            })
            .transpose()?;

        let discount_rate = input
            .discount_rate
            .map(|rate| self.amount(&rate_value(rate)))
            .transpose()?;

        Ok(InvoiceLineBody {
            qty: self.format(&qty, self.policy.quantity_scale)?,
            unit_price: self.format(&unit_price, self.policy.unit_price_scale)?,
            vat_rate: input.vat_rate,
            discount_rate,
            discount_amount,
            withholding_rate: input.withholding_rate,
        })
    }

    /// qty × price
    pub fn calculate_total(
        &self,
        qty: Option<&str>,
        price: Option<&str>,
        scale: u32,
    ) -> Result<MoneyText> {
        let qty = parse_money_input(qty)?;
        let price = parse_money_input(price)?;
        self.format(&self.multiply(&qty, &price), scale)
    }

    /// net × vatRate / 100
    pub fn calculate_vat(&self, net: Option<&str>, vat_rate: Decimal, scale: u32) -> Result<MoneyText> {
        let net = parse_money_input(net)?;
        self.format(&self.percent_of(&net, vat_rate), scale)
    }

    /// amount × discountRate / 100
    pub fn calculate_discount_by_rate(
        &self,
        amount: Option<&str>,
        discount_rate: Decimal,
        scale: u32,
    ) -> Result<MoneyText> {
        let amount = parse_money_input(amount)?;
        self.format(&self.percent_of(&amount, discount_rate), scale)
    }

    /// vat × withholdingRate / 100
    pub fn calculate_withholding(
        &self,
        vat: Option<&str>,
        withholding_rate: Decimal,
        scale: u32,
    ) -> Result<MoneyText> {
        let vat = parse_money_input(vat)?;
        self.format(&self.percent_of(&vat, withholding_rate), scale)
    }

    fn derive(&self, input: &InvoiceLineInput) -> Result<LineFigures> {
        let qty = parse_money_input(input.qty.as_deref())?;
        let unit_price = parse_money_input(input.unit_price.as_deref())?;
        let discount_amount = match input.discount_amount.as_deref() {
            Some(raw) => parse_money_input(Some(raw))?,
            None => BigDecimal::zero(),
        };

        let line_gross = self.multiply(&qty, &unit_price);

        // A non-zero amount always wins; a zero amount falls back to the rate
        let discount = if !discount_amount.is_zero() {
            discount_amount
        } else {
            match input.discount_rate {
                Some(rate) if !rate.is_zero() => self.percent_of(&line_gross, rate),
                _ => BigDecimal::zero(),
            }
        };

        let net = self.policy.working(&line_gross - &discount);
        let vat = self.percent_of(&net, input.vat_rate);
        let withholding = self.percent_of(&vat, input.withholding_rate.unwrap_or(Decimal::ZERO));
        let gross = self.policy.working(&net + &vat);
        let grand_total = self.policy.working(&gross - &withholding);

        Ok(LineFigures {
            line_gross,
            discount,
            net,
            vat,
            withholding,
            gross,
            grand_total,
        })
    }

    fn multiply(&self, left: &BigDecimal, right: &BigDecimal) -> BigDecimal {
        self.policy.working(left * right)
    }

    /// base × rate / 100; each step kept to the working precision
    fn percent_of(&self, base: &BigDecimal, rate: Decimal) -> BigDecimal {
        let hundredth = BigDecimal::new(BigInt::from(1), 2);
        let product = self.multiply(base, &rate_value(rate));
        self.policy.working(product * hundredth)
    }

    fn amount(&self, value: &BigDecimal) -> Result<MoneyText> {
        self.format(value, self.policy.amount_scale)
    }

    fn format(&self, value: &BigDecimal, scale: u32) -> Result<MoneyText> {
        format_money_with(value, scale, self.policy.rounding)
    }
}

fn with_line_context(err: AppError, line: usize) -> AppError {
    match err {
        AppError::InvalidNumberFormat(msg) => {
            AppError::InvalidNumberFormat(format!("line {}: {}", line, msg))
        }
        other => other,
    }
}
