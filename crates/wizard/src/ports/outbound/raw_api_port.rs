//! Raw API Port - Object-safe HTTP boundary
//!
//! Adapters only move JSON. Decoding into domain types happens in the
//! application services so both targets share one parsing path.

use serde_json::Value;
use thiserror::Error;

use tracker_domain::SubmissionPayload;

/// Transport-level failure talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body was not JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    /// GET `path` with extra request headers and decode the body as JSON.
    ///
    /// The HTTP status is not inspected; whatever JSON the backend answers
    /// with is returned.
    async fn get_json(&self, path: &str, headers: &[(String, String)]) -> Result<Value, ApiError>;

    /// POST the payload as a multipart form body and decode the answer as JSON.
    async fn post_multipart(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<Value, ApiError>;
}
