pub mod app_config;
pub mod database;
pub mod memory_repo;
pub mod shipment_repo;

pub use database::DbClient;
pub use memory_repo::InMemoryShipmentRepository;
pub use shipment_repo::PostgresShipmentRepository;
