//! Versioned schema for the service inventory.
//! Applied out-of-band by the `migrate` binary; the HTTP server never alters the schema.
pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_services::Migration),
        ]
    }
}
