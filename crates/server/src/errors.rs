use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body `{"error": ...}` for the API variant.
/// `detail` is echoed to the caller only for client errors; for server
/// errors it is logged and the caller sees the generic message.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn bad_request(message: impl Into<String>, detail: Option<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, detail)
    }

    /// Map a service failure: bad input → 400 naming the rule broken,
    /// anything else → 500 with `failure`.
    pub fn from_service(e: ServiceError, failure: &str) -> Self {
        match e.client_message() {
            Some(message) => Self::bad_request(message, None),
            None => Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure, Some(e.to_string())),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, detail = ?self.detail, "api request failed");
            serde_json::json!({"error": self.message})
        } else {
            warn!(status = %self.status, error = %self.message, detail = ?self.detail, "api request rejected");
            match self.detail {
                Some(detail) => serde_json::json!({"error": self.message, "detail": detail}),
                None => serde_json::json!({"error": self.message}),
            }
        };
        (self.status, Json(body)).into_response()
    }
}

/// Plain-text failure for the dashboard variant.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    pub fn from_service(e: ServiceError, failure: &str) -> Self {
        match e.client_message() {
            Some(message) => {
                warn!(error = %e, "form rejected");
                Self::bad_request(message)
            }
            None => {
                error!(error = %e, "{failure}");
                Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: failure.to_string() }
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn missing_field_maps_to_required_message() {
        let e = JsonApiError::from_service(ServiceError::from(ModelError::MissingField("Hostname")), "Failed to add service.");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "Hostname and IP Address are required.");
    }

    #[test]
    fn overlong_field_names_the_limit() {
        let too_long = || ServiceError::from(ModelError::FieldTooLong { field: "IP Address", max: 50 });
        let e = JsonApiError::from_service(too_long(), "Failed to add service.");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "IP Address must be at most 50 characters.");

        let e = PageError::from_service(too_long(), "Failed to add service.");
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message, "IP Address must be at most 50 characters.");
    }

    #[test]
    fn store_failure_maps_to_internal_error() {
        let e = JsonApiError::from_service(ServiceError::from(ModelError::Db("boom".into())), "Failed to add service.");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to add service.");
    }

    #[test]
    fn page_error_keeps_generic_message() {
        let e = PageError::from_service(ServiceError::Db("password authentication failed".into()), "Failed to delete service.");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to delete service.");
    }
}
