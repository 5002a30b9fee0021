use thiserror::Error;

/// Failures raised by the model layer. The first two are caller mistakes and
/// never reach the database.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Absent, empty or whitespace-only. Holds the field's display label.
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("{field} must be at most {max} characters.")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ModelError::MissingField(_) | ModelError::FieldTooLong { .. })
    }
}
