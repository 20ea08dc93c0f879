use thiserror::Error;

use crate::models::ShipmentResponse;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Hard failure reaching a carrier or reading its reply. A reply with a non-2xx status is
/// not an error; adapters report it as an unsuccessful `ShipmentResponse`.
#[derive(Debug, Error)]
pub enum CarrierError {
    #[error("failed to marshal request: {0}")]
    Encode(#[source] BoxError),

    #[error("failed to send request: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to read response: {0}")]
    Body(#[source] BoxError),
}

/// Failure writing to or reading from the shipment record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize shipment record: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("record store unavailable: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Backend(err.into())
    }
}

#[derive(Debug, Error)]
pub enum ShippingError {
    #[error("provider {0} not found")]
    ProviderNotFound(String),

    #[error(transparent)]
    Provider(#[from] CarrierError),

    /// The carrier accepted the shipment but the audit record could not be written. The
    /// outcome is carried along; there is no compensating call to the carrier.
    #[error("failed to save shipment record: {source}")]
    RecordNotSaved {
        response: Box<ShipmentResponse>,
        #[source]
        source: StoreError,
    },
}

impl ShippingError {
    /// The outcome already obtained from the carrier, if the error happened after the call.
    pub fn response(&self) -> Option<&ShipmentResponse> {
        match self {
            ShippingError::RecordNotSaved { response, .. } => Some(response),
            _ => None,
        }
    }
}

pub type ShippingResult<T> = Result<T, ShippingError>;
