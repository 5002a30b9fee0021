use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use configs::Variant;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::InventoryService;

use crate::openapi::ApiDoc;

pub mod dashboard;
pub mod services;

/// Handles injected into every handler. Cloning is cheap: the inventory
/// shares one repository and its connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub inventory: InventoryService,
}

impl ServerState {
    pub fn new(inventory: InventoryService) -> Self { Self { inventory } }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// JSON API variant: `/api/services` plus OpenAPI docs.
pub fn build_api_router(state: ServerState) -> Router {
    let api = Router::new()
        .route("/api/services", get(services::list).post(services::create))
        .route("/api/services/:id", delete(services::delete))
        .route("/api/services/:id/sell", post(services::sell));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(trace_layer())
}

/// Server-rendered variant: HTML pages and form posts, redirecting back to `/`.
pub fn build_dashboard_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/add", post(dashboard::add))
        .route("/delete/:id", post(dashboard::delete))
        .route("/sell/:id", post(dashboard::sell))
        .route("/health", get(health))
        .with_state(state)
        .layer(trace_layer())
}

pub fn build_router(variant: Variant, state: ServerState) -> Router {
    match variant {
        Variant::Api => build_api_router(state),
        Variant::Dashboard => build_dashboard_router(state),
    }
}

fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        // span per request with method and path, INFO level
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        // status and latency
        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
        // 5xx
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}
