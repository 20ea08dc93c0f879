use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shipbridge_core::{ShippingError, StoreError};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Shipping(ShippingError),
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            AppError::Shipping(err) => {
                tracing::error!("Shipment failed: {}", err);
                let mut body = json!({ "error": err.to_string() });
                // Carrier accepted but the audit write failed: hand the outcome back so the
                // caller can reconcile.
                if let Some(response) = err.response() {
                    body["response"] = json!(response);
                }
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::Store(err) => {
                tracing::error!("Record store error: {}", err);
                error_body(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl From<ShippingError> for AppError {
    fn from(err: ShippingError) -> Self {
        Self::Shipping(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
