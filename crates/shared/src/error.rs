//! Errors raised while decoding backend responses

use thiserror::Error;

use tracker_domain::DomainError;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Body was not valid JSON or did not match the expected fields
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON of the wrong kind
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A value failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}
