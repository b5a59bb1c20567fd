//! Validation error types

/// Error for malformed filter, sort, enum, or date-range input.
///
/// Validation errors are raised synchronously when a query is encoded,
/// before any network call is attempted.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The input field or parameter that failed validation.
    pub field: String,
    /// Human-readable validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
