//! Collabhub API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tower_http::trace::TraceLayer;
use tracing::info;

use collabhub_app::{body_limit_layer, build_cors_layer, build_stores, create_app};
use collabhub_common::config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing Collabhub API Lambda");

    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    let stores = build_stores(&config)
        .await
        .map_err(|e| Error::from(format!("Store initialization error: {}", e)))?;

    let cors_origins = config
        .cors_allowed_origins
        .clone()
        .ok_or_else(|| Error::from("CORS_ALLOWED_ORIGINS environment variable is required"))?;

    let app = create_app(&config, stores)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&cors_origins))
        .layer(body_limit_layer());

    info!("Collabhub API Lambda ready to serve requests");

    run(app).await
}
