//! Service layer for the inventory on top of `models`.
//! - `db` holds the sea-orm statements, one function per store operation.
//! - `inventory` wraps them behind the `ServiceRepository` trait so handlers
//!   receive an injected store instead of reaching for a global pool.

pub mod errors;
pub mod db;
pub mod inventory;
#[cfg(test)]
pub mod test_support;

pub use inventory::{InventoryService, ServiceRepository};
