use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use models::service::{Model, ServiceStatus};

use crate::{errors::JsonApiError, routes::ServerState};

/// Row of `GET /api/services`: the record with `created_at` pre-formatted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceListItem {
    pub id: i32,
    pub hostname: String,
    pub ip_address: String,
    #[schema(value_type = String, example = "Available")]
    pub status: ServiceStatus,
    /// `YYYY-MM-DD HH:MM`
    pub time: String,
}

impl From<&Model> for ServiceListItem {
    fn from(m: &Model) -> Self {
        Self {
            id: m.id,
            hostname: m.hostname.clone(),
            ip_address: m.ip_address.clone(),
            status: m.status,
            time: m.time(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateServiceInput {
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}

fn service_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    id.map(|Path(id)| id)
        .map_err(|rej| JsonApiError::bad_request("Invalid service id.", Some(rej.body_text())))
}

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    responses(
        (status = 200, description = "All services, newest first", body = [ServiceListItem]),
        (status = 500, description = "Failed to fetch services")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ServiceListItem>>, JsonApiError> {
    let rows = state
        .inventory
        .list()
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to fetch services."))?;
    info!(count = rows.len(), "list services");
    Ok(Json(rows.iter().map(ServiceListItem::from).collect()))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = CreateServiceInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Hostname and IP Address are required"),
        (status = 500, description = "Failed to add service")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateServiceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = payload.map_err(|rej| JsonApiError::bad_request("Invalid request body.", Some(rej.body_text())))?;
    let created = state
        .inventory
        .create(input.hostname.as_deref(), input.ip_address.as_deref())
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to add service."))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post, path = "/api/services/{id}/sell", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Updated record, or null when the id is unknown", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Invalid service id"),
        (status = 500, description = "Failed to update service")
    )
)]
pub async fn sell(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Option<Model>>, JsonApiError> {
    let id = service_id(id)?;
    let updated = state
        .inventory
        .sell(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to update service."))?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted, or already absent"),
        (status = 400, description = "Invalid service id"),
        (status = 500, description = "Failed to delete service")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = service_id(id)?;
    state
        .inventory
        .delete(id)
        .await
        .map_err(|e| JsonApiError::from_service(e, "Failed to delete service."))?;
    Ok(StatusCode::NO_CONTENT)
}
