use std::sync::Arc;
use tracing::{info, instrument};

use models::service::{Model, NewService};
use crate::errors::ServiceError;
use crate::inventory::repository::ServiceRepository;

/// Application service for the service inventory.
/// Validates input before it reaches the store and logs every mutation.
#[derive(Clone)]
pub struct InventoryService {
    repo: Arc<dyn ServiceRepository>,
}

impl InventoryService {
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.list().await
    }

    /// Both fields must be present and non-blank. Missing fields arrive as `None`
    /// from the HTTP layer and are rejected the same way as empty ones.
    #[instrument(skip(self))]
    pub async fn create(&self, hostname: Option<&str>, ip_address: Option<&str>) -> Result<Model, ServiceError> {
        let new = NewService::parse(hostname, ip_address)?;
        let created = self.repo.create(&new).await?;
        info!(event = "service_created", id = created.id, hostname = %created.hostname, "added new service");
        Ok(created)
    }

    /// Unknown ids are a silent no-op.
    #[instrument(skip(self))]
    pub async fn sell(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        let updated = self.repo.set_sold(id).await?;
        info!(event = "service_sold", id, found = updated.is_some(), "sold service");
        Ok(updated)
    }

    /// Unknown ids are a silent no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(event = "service_deleted", id, removed, "deleted service");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), ServiceError> {
        self.repo.ping().await
    }
}
