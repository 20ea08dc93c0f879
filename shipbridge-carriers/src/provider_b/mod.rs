mod mapper;
mod models;

pub use mapper::map_to_provider_b;
pub use models::Request;

use std::time::Duration;

use async_trait::async_trait;
use shipbridge_core::{CarrierError, GenericShippingRequest, ShipmentResponse, ShippingProvider};

use crate::client::{CarrierClient, DEFAULT_TIMEOUT};

pub const PROVIDER_NAME: &str = "B";

pub struct ProviderBAdapter {
    client: CarrierClient,
}

impl ProviderBAdapter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CarrierError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CarrierError> {
        Ok(Self {
            client: CarrierClient::new(endpoint, timeout)?,
        })
    }
}

#[async_trait]
impl ShippingProvider for ProviderBAdapter {
    async fn create_shipment(
        &self,
        request: &GenericShippingRequest,
    ) -> Result<ShipmentResponse, CarrierError> {
        let body = map_to_provider_b(request);
        self.client.post_shipment(PROVIDER_NAME, &body).await
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}
