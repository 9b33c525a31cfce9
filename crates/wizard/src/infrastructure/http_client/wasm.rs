//! gloo-net API adapter for the web build
//!
//! Requests go to same-origin relative paths unless a base URL is given, so
//! the browser attaches the session cookie.

use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::FormData;

use tracker_domain::SubmissionPayload;
use tracker_shared::join_url;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone, Default)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn js_error(value: JsValue) -> String {
    match value.dyn_into::<js_sys::Error>() {
        Ok(error) => String::from(error.message()),
        Err(value) => format!("{:?}", value),
    }
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str, headers: &[(String, String)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let request = headers
            .iter()
            .fold(Request::get(&url), |request, (name, value)| {
                request.header(name, value)
            });

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_multipart(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, fields = payload.len(), "POST multipart");

        let form = FormData::new().map_err(|e| ApiError::RequestFailed(js_error(e)))?;
        for (name, value) in payload.iter() {
            form.append_with_str(name, value)
                .map_err(|e| ApiError::RequestFailed(js_error(e)))?;
        }

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}
