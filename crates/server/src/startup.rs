use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::{inventory::SeaOrmServiceRepository, InventoryService};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Connect the pool and wrap it in the injected inventory handle.
/// The schema is expected to be migrated already (`migrate up`).
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    let repo = Arc::new(SeaOrmServiceRepository::new(db));
    Ok(ServerState::new(InventoryService::new(repo)))
}

pub fn build_app(cfg: &AppConfig, state: ServerState) -> Router {
    routes::build_router(cfg.server.variant, state)
}

/// Public entry: build the app for the configured variant and serve it.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(&cfg, state);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, variant = ?cfg.server.variant, event = "listening", "server running on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
