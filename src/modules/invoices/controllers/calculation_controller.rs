//! Calculation endpoints for live invoice-form previews.
//!
//! Handlers are pass-through to [`LineCalculator`]; nothing is stored.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::AppError;
use crate::modules::invoices::models::{InvoiceDraft, InvoiceLineInput};
use crate::modules::invoices::services::LineCalculator;
use crate::modules::money::models::{check_scale, MoneyText};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRequest {
    #[serde(default)]
    pub qty: Option<String>,
    #[serde(default)]
    pub unit_price: Option<String>,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatRequest {
    #[serde(default)]
    pub net: Option<String>,
    #[serde(default)]
    pub vat_rate: Decimal,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequest {
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub discount_rate: Decimal,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithholdingRequest {
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub withholding_rate: Decimal,
    #[serde(default)]
    pub scale: Option<u32>,
}

/// Single derived figure
#[derive(Debug, Serialize, Deserialize)]
pub struct FigureResponse {
    pub value: MoneyText,
}

fn resolve_scale(calculator: &LineCalculator, scale: Option<u32>) -> Result<u32, AppError> {
    check_scale(scale.unwrap_or(calculator.policy().amount_scale))
}

/// POST /api/calculations/total
pub async fn calculate_total(
    calculator: web::Data<LineCalculator>,
    request: web::Json<TotalRequest>,
) -> Result<HttpResponse, AppError> {
    let scale = resolve_scale(&calculator, request.scale)?;
    let value = calculator.calculate_total(
        request.qty.as_deref(),
        request.unit_price.as_deref(),
        scale,
    )?;

    Ok(HttpResponse::Ok().json(FigureResponse { value }))
}

/// POST /api/calculations/vat
pub async fn calculate_vat(
    calculator: web::Data<LineCalculator>,
    request: web::Json<VatRequest>,
) -> Result<HttpResponse, AppError> {
    let scale = resolve_scale(&calculator, request.scale)?;
    let value = calculator.calculate_vat(request.net.as_deref(), request.vat_rate, scale)?;

    Ok(HttpResponse::Ok().json(FigureResponse { value }))
}

/// POST /api/calculations/discount
pub async fn calculate_discount(
    calculator: web::Data<LineCalculator>,
    request: web::Json<DiscountRequest>,
) -> Result<HttpResponse, AppError> {
    let scale = resolve_scale(&calculator, request.scale)?;
    let value = calculator.calculate_discount_by_rate(
        request.amount.as_deref(),
        request.discount_rate,
        scale,
    )?;

    Ok(HttpResponse::Ok().json(FigureResponse { value }))
}

/// POST /api/calculations/withholding
pub async fn calculate_withholding(
    calculator: web::Data<LineCalculator>,
    request: web::Json<WithholdingRequest>,
) -> Result<HttpResponse, AppError> {
    let scale = resolve_scale(&calculator, request.scale)?;
    let value = calculator.calculate_withholding(
        request.vat.as_deref(),
        request.withholding_rate,
        scale,
    )?;

    Ok(HttpResponse::Ok().json(FigureResponse { value }))
}

/// POST /api/calculations/invoice-line
pub async fn calculate_invoice_line(
    calculator: web::Data<LineCalculator>,
    request: web::Json<InvoiceLineInput>,
) -> Result<HttpResponse, AppError> {
    let result = calculator.compute(&request)?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /api/calculations/invoice
pub async fn calculate_invoice(
    calculator: web::Data<LineCalculator>,
    request: web::Json<InvoiceDraft>,
) -> Result<HttpResponse, AppError> {
    let calculation = calculator.compute_invoice(&request.lines)?;

    tracing::info!(
        lines = calculation.lines.len(),
        grand_total = %calculation.totals.grand_total,
        "Calculated invoice preview"
    );

    Ok(HttpResponse::Ok().json(calculation))
}

/// POST /api/calculations/line-body
pub async fn build_line_body(
    calculator: web::Data<LineCalculator>,
    request: web::Json<InvoiceLineInput>,
) -> Result<HttpResponse, AppError> {
    let body = calculator.line_body(&request)?;
    Ok(HttpResponse::Ok().json(body))
}

/// Configure calculation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/calculations")
            .route("/total", web::post().to(calculate_total))
            .route("/vat", web::post().to(calculate_vat))
            .route("/discount", web::post().to(calculate_discount))
            .route("/withholding", web::post().to(calculate_withholding))
            .route("/invoice-line", web::post().to(calculate_invoice_line))
            .route("/invoice", web::post().to(calculate_invoice))
            .route("/line-body", web::post().to(build_line_body)),
    );
}
