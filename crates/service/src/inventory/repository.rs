use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::service::{Model, NewService};
use crate::errors::ServiceError;

/// Persistence contract for service records. Each call is a single statement.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Every record, newest id first.
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    /// `new` is already validated.
    async fn create(&self, new: &NewService) -> Result<Model, ServiceError>;
    /// `None` when no record has `id`.
    async fn set_sold(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    /// `false` when nothing was removed; never an error for an absent id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list(&self) -> Result<Vec<Model>, ServiceError> {
        crate::db::service_store::list_services(&self.db).await
    }

    async fn create(&self, new: &NewService) -> Result<Model, ServiceError> {
        crate::db::service_store::create_service(&self.db, new).await
    }

    async fn set_sold(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        crate::db::service_store::sell_service(&self.db, id).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::service_store::delete_service(&self.db, id).await
    }

    async fn ping(&self) -> Result<(), ServiceError> {
        crate::db::service_store::ping(&self.db).await
    }
}

/// In-memory repository for tests and local demos without PostgreSQL.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard};

    use chrono::Utc;
    use models::service::ServiceStatus;

    #[derive(Default)]
    pub struct InMemoryServiceRepository {
        rows: Mutex<Rows>,
        failing: AtomicBool,
    }

    #[derive(Default)]
    struct Rows {
        next_id: i32,
        by_id: BTreeMap<i32, Model>,
    }

    impl InMemoryServiceRepository {
        pub fn new() -> Self { Self::default() }

        /// While set, every call fails like an unreachable database.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().map(|r| r.by_id.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn rows(&self) -> Result<MutexGuard<'_, Rows>, ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            self.rows.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl ServiceRepository for InMemoryServiceRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            let rows = self.rows()?;
            Ok(rows.by_id.values().rev().cloned().collect())
        }

        async fn create(&self, new: &NewService) -> Result<Model, ServiceError> {
            let mut rows = self.rows()?;
            rows.next_id += 1;
            let model = Model {
                id: rows.next_id,
                hostname: new.hostname().to_string(),
                ip_address: new.ip_address().to_string(),
                status: ServiceStatus::Available,
                created_at: Utc::now().into(),
            };
            rows.by_id.insert(model.id, model.clone());
            Ok(model)
        }

        async fn set_sold(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            let mut rows = self.rows()?;
            Ok(rows.by_id.get_mut(&id).map(|m| {
                m.status = ServiceStatus::Sold;
                m.clone()
            }))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut rows = self.rows()?;
            Ok(rows.by_id.remove(&id).is_some())
        }

        async fn ping(&self) -> Result<(), ServiceError> {
            self.rows().map(|_| ())
        }
    }
}
