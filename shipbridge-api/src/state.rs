use std::sync::Arc;

use shipbridge_core::{ShipmentRepository, ShipmentService};

#[derive(Clone)]
pub struct AppState {
    pub shipping: Arc<dyn ShipmentService>,
    /// Read side of the audit trail, for reporting endpoints
    pub records: Arc<dyn ShipmentRepository>,
}
