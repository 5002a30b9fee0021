//! Inventory module: repository abstraction plus the service the HTTP layer talks to.

pub mod repository;
pub mod service;

pub use repository::{SeaOrmServiceRepository, ServiceRepository};
pub use service::InventoryService;
