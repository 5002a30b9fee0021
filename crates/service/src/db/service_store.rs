use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder};
use models::service::{self, Entity as ServiceEntity, NewService};
use crate::errors::ServiceError;

/// All services, newest id first.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<service::Model>, ServiceError> {
    let rows = ServiceEntity::find()
        .order_by_desc(service::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Insert a service with the default status and the current timestamp.
pub async fn create_service(db: &DatabaseConnection, new: &NewService) -> Result<service::Model, ServiceError> {
    let created = service::create(db, new).await?;
    Ok(created)
}

/// Mark a service sold; `None` if the id does not exist.
pub async fn sell_service(db: &DatabaseConnection, id: i32) -> Result<Option<service::Model>, ServiceError> {
    let updated = service::mark_sold(db, id).await?;
    Ok(updated)
}

/// Delete a service; returns true if a row was removed.
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ServiceEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// Round-trip a trivial statement to prove the pool can reach the server.
pub async fn ping(db: &DatabaseConnection) -> Result<(), ServiceError> {
    db.execute_unprepared("SELECT 1").await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}
