use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Full service record as returned by create and sell.
#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub hostname: String,
    pub ip_address: String,
    #[schema(example = "Available")]
    pub status: String,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::sell,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceDoc,
            crate::routes::services::ServiceListItem,
            crate::routes::services::CreateServiceInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "services")
    )
)]
pub struct ApiDoc;
