use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use service::errors::REQUIRED_FIELDS_MESSAGE;
use tracing::{error, warn};

use crate::{
    errors::PageError,
    routes::ServerState,
    views::{self, DashboardPage, DbStatus},
};

#[derive(Debug, Default, Deserialize)]
pub struct AddServiceForm {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Probe the store, then list. Any failure renders the page with the red
/// status bar, no rows, and a 500.
pub async fn index(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let listed = match state.inventory.ping().await {
        Ok(()) => state.inventory.list().await,
        Err(e) => Err(e),
    };
    match listed {
        Ok(services) => {
            let page = views::render(&DashboardPage { services: &services, db_status: DbStatus::Stable });
            (StatusCode::OK, Html(page))
        }
        Err(e) => {
            error!(error = %e, "error on main route");
            let page = views::render(&DashboardPage { services: &[], db_status: DbStatus::Unavailable });
            (StatusCode::INTERNAL_SERVER_ERROR, Html(page))
        }
    }
}

pub async fn add(
    State(state): State<ServerState>,
    form: Result<Form<AddServiceForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let Form(form) = form.map_err(|rej| {
        warn!(error = %rej, "unreadable add form");
        PageError::bad_request(REQUIRED_FIELDS_MESSAGE)
    })?;
    state
        .inventory
        .create(form.hostname.as_deref(), form.ip_address.as_deref())
        .await
        .map_err(|e| PageError::from_service(e, "Failed to add service."))?;
    Ok(Redirect::to("/"))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Redirect, PageError> {
    state
        .inventory
        .delete(id)
        .await
        .map_err(|e| PageError::from_service(e, "Failed to delete service."))?;
    Ok(Redirect::to("/"))
}

pub async fn sell(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Redirect, PageError> {
    state
        .inventory
        .sell(id)
        .await
        .map_err(|e| PageError::from_service(e, "Failed to update service."))?;
    Ok(Redirect::to("/"))
}
