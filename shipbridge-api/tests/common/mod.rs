#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::{json, Value};
use shipbridge_api::{app, AppState};
use shipbridge_core::{
    CarrierError, GenericShippingRequest, ShipmentRepository, ShipmentService, ShipmentResponse,
    ShippingProvider, ShippingService,
};
use shipbridge_store::InMemoryShipmentRepository;
use tower::ServiceExt;

pub struct StubProvider {
    pub name: &'static str,
    pub fail_with: Option<&'static str>,
}

#[async_trait]
impl ShippingProvider for StubProvider {
    async fn create_shipment(
        &self,
        _request: &GenericShippingRequest,
    ) -> Result<ShipmentResponse, CarrierError> {
        if let Some(message) = self.fail_with {
            return Err(CarrierError::Transport(message.into()));
        }
        Ok(ShipmentResponse {
            provider: self.name.to_string(),
            success: true,
            tracking_id: Some("TRACK123".to_string()),
            awb: Some("AWB123".to_string()),
            message: Some("Success".to_string()),
            raw_response: None,
        })
    }

    fn provider_name(&self) -> &str {
        self.name
    }

    fn endpoint(&self) -> &str {
        "http://stub.local"
    }
}

pub fn stub(name: &'static str) -> Arc<dyn ShippingProvider> {
    Arc::new(StubProvider { name, fail_with: None })
}

pub fn failing(name: &'static str, message: &'static str) -> Arc<dyn ShippingProvider> {
    Arc::new(StubProvider {
        name,
        fail_with: Some(message),
    })
}

pub fn state_with(
    providers: Vec<Arc<dyn ShippingProvider>>,
) -> (AppState, Arc<InMemoryShipmentRepository>) {
    let repo = Arc::new(InMemoryShipmentRepository::new());
    let mut service = ShippingService::new(repo.clone());
    for provider in providers {
        service.register_provider(provider);
    }
    let state = AppState {
        shipping: Arc::new(service),
        records: repo.clone(),
    };
    (state, repo)
}

pub fn state_with_service(service: Arc<dyn ShipmentService>) -> AppState {
    let repo: Arc<dyn ShipmentRepository> = Arc::new(InMemoryShipmentRepository::new());
    AppState {
        shipping: service,
        records: repo,
    }
}

pub fn sample_request() -> Value {
    json!({
        "weight": {"value": 1000, "unit": "Grams"},
        "shipper": {
            "contact": {
                "name": "ABC Associates",
                "mobileNumber": "0506356566",
                "phoneNumber": "041234567",
                "emailAddress": "orders@test.com",
                "companyName": "ABC Associates"
            },
            "address": {
                "line1": "Umm Rammool",
                "city": "Dubai",
                "countryCode": "AE",
                "zipCode": "00000"
            },
            "referenceNo1": "ShipperRef1",
            "referenceNo2": "ShipperRef2"
        },
        "consignee": {
            "contact": {
                "name": "John Doe",
                "companyName": "John Doe",
                "emailAddress": "test@test.com"
            },
            "address": {
                "line1": "Test Address",
                "city": "Bangalore",
                "countryCode": "IN",
                "zipCode": "1001"
            }
        },
        "dimensions": {"length": 10, "height": 10, "width": 10, "unit": "Meter"},
        "account": {"number": "123", "username": "testuser", "password": "testpass"},
        "productCode": "International",
        "serviceType": "Express",
        "isInsured": true,
        "numberOfPieces": 1,
        "declaredValue": {"amount": 100, "currency": "AED"},
        "customsDeclarations": [
            {
                "description": "Shirt",
                "countryOfOrigin": "AE",
                "weight": 100,
                "quantity": 1,
                "hsCode": "123456",
                "value": 50
            }
        ]
    })
}

pub async fn send(state: AppState, request: Request<Body>) -> (u16, Value) {
    let response: Response<Body> = app(state).oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}
