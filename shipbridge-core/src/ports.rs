use async_trait::async_trait;

use crate::error::{CarrierError, ShippingResult, StoreError};
use crate::models::{GenericShippingRequest, ShipmentRecord, ShipmentResponse};

/// A carrier integration addressed by a unique short name.
#[async_trait]
pub trait ShippingProvider: Send + Sync {
    /// Map the generic request to the carrier's payload, call the carrier and normalize
    /// its reply. A carrier rejection comes back as `Ok` with `success == false`.
    async fn create_shipment(
        &self,
        request: &GenericShippingRequest,
    ) -> Result<ShipmentResponse, CarrierError>;

    /// Registry key for this carrier
    fn provider_name(&self) -> &str;

    fn endpoint(&self) -> &str;
}

/// Durable audit trail of successful shipments.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn save(&self, record: &ShipmentRecord) -> Result<(), StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<ShipmentRecord>, StoreError>;

    /// Most recent records for a carrier, newest first
    async fn find_by_provider(
        &self,
        provider: &str,
        limit: i64,
    ) -> Result<Vec<ShipmentRecord>, StoreError>;
}

/// Entry points used by the request boundary.
#[async_trait]
pub trait ShipmentService: Send + Sync {
    async fn process_shipment(
        &self,
        request: &GenericShippingRequest,
        provider_name: &str,
    ) -> ShippingResult<ShipmentResponse>;

    async fn broadcast_shipment(
        &self,
        request: &GenericShippingRequest,
    ) -> ShippingResult<Vec<ShipmentResponse>>;
}
