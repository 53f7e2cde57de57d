//! Money text endpoints used by form fields for live feedback

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::AppError;
use crate::modules::money::models::{MoneyPolicy, MoneyText};
use crate::modules::money::services::{
    format_money_with, is_valid_money_format, normalize_money_input, parse_money_input,
};

#[derive(Debug, Deserialize)]
pub struct MoneyValueRequest {
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub scale: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedResponse {
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidityResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub value: MoneyText,
}

/// POST /api/money/normalize
pub async fn normalize(request: web::Json<MoneyValueRequest>) -> HttpResponse {
    let value = normalize_money_input(request.value.as_deref());
    HttpResponse::Ok().json(NormalizedResponse { value })
}

/// POST /api/money/validate
pub async fn validate(request: web::Json<MoneyValueRequest>) -> HttpResponse {
    let valid = is_valid_money_format(request.value.as_deref());
    HttpResponse::Ok().json(ValidityResponse { valid })
}

/// POST /api/money/format
///
/// Normalizes, parses and rounds to `scale` (defaults to the amount scale).
pub async fn format(
    policy: web::Data<MoneyPolicy>,
    request: web::Json<FormatRequest>,
) -> Result<HttpResponse, AppError> {
    let scale = request.scale.unwrap_or(policy.amount_scale);
    let parsed = parse_money_input(request.value.as_deref()).inspect_err(|err| {
        tracing::warn!(error = %err, "Rejected money text");
    })?;
    let value = format_money_with(&parsed, scale, policy.rounding)?;

    Ok(HttpResponse::Ok().json(FormattedResponse { value }))
}

/// Configure money routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/money")
            .route("/normalize", web::post().to(normalize))
            .route("/validate", web::post().to(validate))
            .route("/format", web::post().to(format)),
    );
}
