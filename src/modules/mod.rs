use actix_web::web;

use crate::middleware::json_error_handler;
use crate::modules::invoices::LineCalculator;
use crate::modules::money::MoneyPolicy;

pub mod health;
pub mod invoices;
pub mod money;

/// Register shared state and every route of the service
pub fn configure(cfg: &mut web::ServiceConfig, policy: MoneyPolicy) {
    cfg.app_data(web::Data::new(policy))
        .app_data(web::Data::new(LineCalculator::new(policy)))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::controllers::configure)
        .configure(money::controllers::configure)
        .configure(invoices::controllers::configure);
}
