use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pii::{Masked, MASK};

/// Raw, untyped carrier reply kept for the audit trail.
pub type RawResponse = Map<String, Value>;

// ============================================================================
// Generic (carrier-agnostic) request
// ============================================================================

/// Carrier-agnostic shipment request accepted by the API.
///
/// Every field falls back to its zero value when missing from the payload, so partially
/// filled requests still decode and each carrier decides what it requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericShippingRequest {
    pub weight: WeightInfo,
    pub shipper: Party,
    pub consignee: Party,
    pub dimensions: Dimensions,
    pub account: AccountInfo,
    pub product_code: String,
    pub service_type: String,
    pub is_insured: bool,
    pub customs_declarations: Vec<CustomsDeclaration>,
    pub declared_value: DeclaredValue,
    pub number_of_pieces: i32,
    pub reference_numbers: Vec<String>,
    pub special_notes: String,
    pub remarks: String,
    pub delivery_type: String,
    pub content_type: String,
    pub is_cod: bool,
    pub cod_amount: f64,
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightInfo {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Party {
    pub contact: Contact,
    pub address: Address,
    pub reference_no1: String,
    pub reference_no2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub mobile_number: String,
    pub phone_number: String,
    pub email_address: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub country_code: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub number: String,
    pub username: String,
    pub password: Masked<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomsDeclaration {
    pub reference: String,
    pub description: String,
    pub country_of_origin: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub quantity: i32,
    pub hs_code: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredValue {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub weight: f64,
    pub pieces: i32,
    pub value: f64,
}

// ============================================================================
// Outcome and audit record
// ============================================================================

/// Normalized result of one carrier invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    pub provider: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<RawResponse>,
}

impl ShipmentResponse {
    /// A failed outcome standing in for a carrier call that never produced a reply.
    pub fn failed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            success: false,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Appends a note to the message, keeping whatever the carrier said.
    pub fn append_message(&mut self, note: &str) {
        self.message = Some(match self.message.take() {
            Some(existing) if !existing.is_empty() => format!("{}; {}", existing, note),
            _ => note.to_string(),
        });
    }
}

/// Audit trail entry for one successful outcome. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub id: String,
    pub provider: String,
    pub generic_payload: Value,
    pub transformed_payload: Value,
    pub provider_response: Value,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

impl ShipmentRecord {
    /// Serializes the request, the raw carrier reply and the outcome into a fresh record.
    pub fn from_outcome(
        request: &GenericShippingRequest,
        response: &ShipmentResponse,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            provider: response.provider.clone(),
            generic_payload: serde_json::to_value(request)?,
            transformed_payload: serde_json::to_value(&response.raw_response)?,
            provider_response: serde_json::to_value(response)?,
            success: response.success,
            created_at: Utc::now(),
        })
    }

    /// The record as served to readers: carrier credentials inside the stored request are
    /// masked. The stored copy is left untouched.
    pub fn redacted(mut self) -> Self {
        let account = self
            .generic_payload
            .get_mut("account")
            .and_then(Value::as_object_mut);
        if let Some(account) = account {
            for key in ["username", "password"] {
                if let Some(value) = account.get_mut(key) {
                    *value = Value::String(MASK.to_string());
                }
            }
        }
        self
    }
}
