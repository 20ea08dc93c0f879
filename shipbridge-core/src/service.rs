use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::{info, warn};

use crate::error::{ShippingError, ShippingResult, StoreError};
use crate::models::{GenericShippingRequest, ShipmentRecord, ShipmentResponse};
use crate::ports::{ShipmentRepository, ShipmentService, ShippingProvider};
use crate::registry::ProviderRegistry;

/// Routes generic shipment requests to carrier adapters and records every successful
/// outcome in the audit trail.
pub struct ShippingService {
    providers: ProviderRegistry,
    repository: Arc<dyn ShipmentRepository>,
}

impl ShippingService {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self {
            providers: ProviderRegistry::new(),
            repository,
        }
    }

    /// Adds a carrier, replacing any adapter already registered under the same name.
    pub fn register_provider(&mut self, provider: Arc<dyn ShippingProvider>) {
        let name = provider.provider_name().to_string();
        let endpoint = provider.endpoint().to_string();
        if self.providers.register(provider).is_some() {
            warn!("Provider {} re-registered, previous adapter replaced", name);
        }
        info!("Registered provider {} -> {}", name, endpoint);
    }

    /// Runs one carrier as part of a broadcast. Never fails: carrier errors become a failed
    /// outcome and a failed audit write is noted in the message.
    async fn broadcast_branch(
        &self,
        name: String,
        provider: Arc<dyn ShippingProvider>,
        request: &GenericShippingRequest,
    ) -> ShipmentResponse {
        let mut response = match provider.create_shipment(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Provider {} failed during broadcast: {}", name, e);
                return ShipmentResponse::failed(name, e.to_string());
            }
        };

        if response.success {
            if let Err(e) = self.save_shipment_record(request, &response).await {
                warn!("Shipment record for provider {} not saved: {}", name, e);
                response.append_message(&format!("saved failed: {}", e));
            }
        }

        response
    }

    async fn save_shipment_record(
        &self,
        request: &GenericShippingRequest,
        response: &ShipmentResponse,
    ) -> Result<(), StoreError> {
        let record = ShipmentRecord::from_outcome(request, response)?;
        self.repository.save(&record).await?;
        info!("Saved shipment record {} for provider {}", record.id, record.provider);
        Ok(())
    }
}

#[async_trait]
impl ShipmentService for ShippingService {
    async fn process_shipment(
        &self,
        request: &GenericShippingRequest,
        provider_name: &str,
    ) -> ShippingResult<ShipmentResponse> {
        let provider = self
            .providers
            .lookup(provider_name)
            .ok_or_else(|| ShippingError::ProviderNotFound(provider_name.to_string()))?;

        let response = provider.create_shipment(request).await?;

        if !response.success {
            warn!(
                "Provider {} rejected shipment: {}",
                provider_name,
                response.message.as_deref().unwrap_or("no message")
            );
            return Ok(response);
        }

        if let Err(source) = self.save_shipment_record(request, &response).await {
            return Err(ShippingError::RecordNotSaved {
                response: Box::new(response),
                source,
            });
        }

        Ok(response)
    }

    async fn broadcast_shipment(
        &self,
        request: &GenericShippingRequest,
    ) -> ShippingResult<Vec<ShipmentResponse>> {
        let snapshot = self.providers.snapshot();
        info!("Broadcasting shipment to {} providers", snapshot.len());

        // All branches are polled concurrently in the caller's task, so dropping this
        // future cancels every in-flight carrier call.
        let branches = snapshot
            .into_iter()
            .map(|(name, provider)| self.broadcast_branch(name, provider, request));

        Ok(join_all(branches).await)
    }
}
