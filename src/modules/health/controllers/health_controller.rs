use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::money::models::MoneyPolicy;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub money: MoneySettings,
}

/// Active calculation settings, so a client can confirm it agrees with them
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneySettings {
    pub rounding: String,
    pub amount_scale: u32,
    pub working_precision: u64,
}

/// GET /health - Liveness probe
pub async fn health_check(policy: web::Data<MoneyPolicy>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        money: MoneySettings {
            rounding: policy.rounding.to_string(),
            amount_scale: policy.amount_scale,
            working_precision: policy.precision,
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
