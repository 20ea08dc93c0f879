//! Stand-in carrier for local runs: accepts any shipment and replies with random
//! tracking and AWB numbers.

use std::net::SocketAddr;

use axum::{extract::State, routing::{get, post}, Json, Router};
use rand::Rng;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
struct MockCarrier {
    provider: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_carrier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = std::env::var("PROVIDER_NAME").unwrap_or_else(|_| "UNKNOWN".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let app = Router::new()
        .route("/createShipping", post(create_shipping))
        .route("/health", get(|| async { "OK" }))
        .with_state(MockCarrier {
            provider: provider.clone(),
        });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Mock provider {} listening on {}", provider, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn create_shipping(
    State(carrier): State<MockCarrier>,
    body: axum::body::Bytes,
) -> Json<Value> {
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let (tracking, awb) = {
        let mut rng = rand::thread_rng();
        (rng.gen_range(0..999_999), rng.gen_range(0..999_999))
    };

    let tracking_id = format!("{}-TRACK-{}", carrier.provider, tracking);
    tracing::info!("[{}] Received shipment request - Tracking: {}", carrier.provider, tracking_id);

    Json(json!({
        "trackingId": tracking_id,
        "awb": format!("{}-AWB-{}", carrier.provider, awb),
        "status": "success",
        "message": format!("Shipment created successfully via provider {}", carrier.provider),
        "provider": carrier.provider,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "request": request,
    }))
}
