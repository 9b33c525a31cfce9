//! Errors that can occur in service operations

use thiserror::Error;

use tracker_shared::ProtocolError;

use crate::ports::outbound::ApiError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered with JSON of the wrong shape
    #[error("Invalid response: {0}")]
    Protocol(#[from] ProtocolError),
}
