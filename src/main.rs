use accounting_money::config::{Config, LogFormat};
use accounting_money::middleware::{ErrorHandler, RequestId};
use accounting_money::modules;
use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    let policy = config.money.policy();

    tracing::info!("Starting accounting money service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        rounding = %policy.rounding,
        precision = policy.precision,
        amount_scale = policy.amount_scale,
        "Money policy loaded"
    );

    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_allowed_origin.clone();

    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::permissive(),
        };

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(cors)
            .configure(|cfg| modules::configure(cfg, policy))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated")
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("accounting_money={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
