use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use tokio::sync::OnceCell;

use crate::db::connect_from_env;
use crate::service::{self, NewService, ServiceStatus};

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// `None` when no database is configured for this run.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect_from_env().await?;
    MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_create_defaults_to_available() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = service::create(&db, &NewService::parse(Some(" crud-a.example.com "), Some("10.1.0.1"))?).await?;
    assert!(created.id > 0);
    assert_eq!(created.hostname, "crud-a.example.com");
    assert_eq!(created.status, ServiceStatus::Available);

    service::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_mark_sold_is_repeatable() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = service::create(&db, &NewService::parse(Some("crud-b.example.com"), Some("10.1.0.2"))?).await?;
    let sold = service::mark_sold(&db, created.id).await?.expect("row exists");
    assert_eq!(sold.status, ServiceStatus::Sold);
    assert_eq!(sold.created_at, created.created_at);

    let again = service::mark_sold(&db, created.id).await?.expect("row exists");
    assert_eq!(again.status, ServiceStatus::Sold);

    service::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(service::mark_sold(&db, created.id).await?.is_none());
    Ok(())
}
