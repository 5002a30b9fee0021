use models::errors::ModelError;
use thiserror::Error;

/// Message shown when a required field is absent or blank.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Hostname and IP Address are required.";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ServiceError {
    /// Whether the caller sent bad input, as opposed to the store failing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Model(e) if e.is_invalid_input())
    }

    /// Text safe to show the caller for a client error; `None` otherwise.
    pub fn client_message(&self) -> Option<String> {
        match self {
            ServiceError::Model(ModelError::MissingField(_)) => Some(REQUIRED_FIELDS_MESSAGE.to_string()),
            ServiceError::Model(e @ ModelError::FieldTooLong { .. }) => Some(e.to_string()),
            _ => None,
        }
    }
}
