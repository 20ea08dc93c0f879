use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use shipbridge_core::GenericShippingRequest;
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateShipmentParams {
    /// Target carrier; absent or empty broadcasts to every carrier
    pub provider: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/createShipping", post(create_shipment))
}

async fn create_shipment(
    State(state): State<AppState>,
    Query(params): Query<CreateShipmentParams>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request: GenericShippingRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected shipment payload: {}", e);
        AppError::BadRequest("invalid request body".to_string())
    })?;

    match params.provider.as_deref().filter(|p| !p.is_empty()) {
        None => {
            let responses = state.shipping.broadcast_shipment(&request).await?;
            let succeeded = responses.iter().filter(|r| r.success).count();
            info!("Broadcast finished: {}/{} providers succeeded", succeeded, responses.len());
            Ok(Json(responses).into_response())
        }
        Some(provider) => {
            let response = state.shipping.process_shipment(&request, provider).await?;
            info!("Shipment via {} finished, success={}", provider, response.success);
            Ok(Json(response).into_response())
        }
    }
}
