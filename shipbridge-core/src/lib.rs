pub mod error;
pub mod models;
pub mod pii;
pub mod ports;
pub mod registry;
pub mod service;

pub use error::{CarrierError, ShippingError, ShippingResult, StoreError};
pub use models::{GenericShippingRequest, RawResponse, ShipmentRecord, ShipmentResponse};
pub use ports::{ShipmentRepository, ShipmentService, ShippingProvider};
pub use registry::ProviderRegistry;
pub use service::ShippingService;
