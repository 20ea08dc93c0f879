use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use shipbridge_api::{app, AppState};
use shipbridge_carriers::{ProviderAAdapter, ProviderBAdapter};
use shipbridge_core::ShippingService;
use shipbridge_store::{app_config::Config, DbClient, PostgresShipmentRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "shipbridge_api=debug,shipbridge_core=debug,shipbridge_carriers=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Shipbridge API on port {}", config.server.port);

    let db = DbClient::new(&config.database.connection_url(), config.database.max_connections)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;

    let repository = Arc::new(PostgresShipmentRepository::new(db.pool.clone()));

    let timeout = Duration::from_secs(config.carriers.timeout_seconds);
    let mut shipping = ShippingService::new(repository.clone());
    shipping.register_provider(Arc::new(
        ProviderAAdapter::with_timeout(config.carriers.a.endpoint.clone(), timeout)
            .context("Failed to build provider A client")?,
    ));
    shipping.register_provider(Arc::new(
        ProviderBAdapter::with_timeout(config.carriers.b.endpoint.clone(), timeout)
            .context("Failed to build provider B client")?,
    ));

    let app_state = AppState {
        shipping: Arc::new(shipping),
        records: repository,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
