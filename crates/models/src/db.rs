use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Build the pool described by `cfg`. The returned handle is cheap to clone
/// and is what gets injected into the store.
///
/// Connections are opened lazily, so a server can start while PostgreSQL is
/// still unreachable and report that per request instead of refusing to boot.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging)
        .connect_lazy(true);
    let db = Database::connect(opt).await?;
    info!(
        event = "db_pool_configured",
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool configured"
    );
    Ok(db)
}

/// Connect using `DATABASE_URL` with default pool settings. Used by the
/// database-backed tests.
pub async fn connect_from_env() -> anyhow::Result<DatabaseConnection> {
    let url = std::env::var("DATABASE_URL")?;
    let cfg = DatabaseConfig { url, ..Default::default() };
    connect(&cfg).await
}
