use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shipbridge_core::ShipmentRecord;

use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListRecordsParams {
    pub provider: Option<String>,
    pub limit: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/shipments", get(list_records))
        .route("/api/v1/shipments/{id}", get(get_record))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShipmentRecord>, AppError> {
    state
        .records
        .find_by_id(&id)
        .await?
        .map(|record| Json(record.redacted()))
        .ok_or_else(|| AppError::NotFound(format!("shipment record {} not found", id)))
}

async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<ListRecordsParams>,
) -> Result<Json<Vec<ShipmentRecord>>, AppError> {
    let provider = params
        .provider
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("provider query parameter is required".to_string()))?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let records = state.records.find_by_provider(&provider, limit).await?;
    Ok(Json(records.into_iter().map(ShipmentRecord::redacted).collect()))
}
