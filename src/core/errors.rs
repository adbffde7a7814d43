use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum SplitviewError {
    /// Input validation failed for a single field
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Fetched payload does not have the shape of a transaction list
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown status filter: {0}")]
    UnknownStatusFilter(String),

    /// Backend-supplied shares break the split invariant
    #[error("Share mismatch on transaction {id}: {detail}")]
    ShareMismatch { id: String, detail: String },

    /// Fetch collaborator failed
    #[error("Source error: {0}")]
    SourceError(String),
}

impl SplitviewError {
    pub(crate) fn invalid(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SplitviewError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}
