use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shipbridge_core::{CarrierError, RawResponse, ShipmentResponse};
use tracing::debug;

/// Upper bound for one carrier round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP exchange shared by every carrier: POST a JSON body, keep the raw reply, and
/// normalize it into a `ShipmentResponse`.
#[derive(Clone, Debug)]
pub struct CarrierClient {
    endpoint: String,
    client: Client,
}

impl CarrierClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, CarrierError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CarrierError::Transport(Box::new(e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn post_shipment<T: Serialize>(
        &self,
        provider: &str,
        body: &T,
    ) -> Result<ShipmentResponse, CarrierError> {
        let payload = serde_json::to_vec(body).map_err(|e| CarrierError::Encode(Box::new(e)))?;

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| CarrierError::Transport(Box::new(e)))?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| CarrierError::Body(Box::new(e)))?;

        debug!("Provider {} replied {} ({} bytes)", provider, status, body.len());

        Ok(normalize_reply(provider, status.is_success(), &body))
    }
}

/// Builds the outcome from a carrier reply. Non-JSON bodies are kept under `raw`.
pub fn normalize_reply(provider: &str, success: bool, body: &[u8]) -> ShipmentResponse {
    let raw: RawResponse = match serde_json::from_slice(body) {
        Ok(map) => map,
        Err(_) => {
            let mut map = RawResponse::new();
            map.insert(
                "raw".to_string(),
                Value::String(String::from_utf8_lossy(body).into_owned()),
            );
            map
        }
    };

    let field = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);

    ShipmentResponse {
        provider: provider.to_string(),
        success,
        tracking_id: field("trackingId"),
        awb: field("awb"),
        message: field("message"),
        raw_response: Some(raw),
    }
}
