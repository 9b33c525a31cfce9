//! reqwest-backed API adapter for the desktop build

use reqwest::multipart::Form;
use reqwest::Client;
use serde_json::Value;

use tracker_domain::SubmissionPayload;
use tracker_shared::join_url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Talks to the tracker backend at an absolute base URL.
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "Backend answered with non-success status");
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, headers: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let request = headers
            .iter()
            .fold(self.client.get(&url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            });

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, fields = payload.len(), "POST multipart");

        let form = payload.iter().fold(Form::new(), |form, (name, value)| {
            form.text(name.to_string(), value.to_string())
        });

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Self::read_json(response).await
    }
}
