//! Scripted `RawApiPort` that records every call

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use tracker_domain::SubmissionPayload;

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGet {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub path: String,
    pub payload: SubmissionPayload,
}

#[derive(Default)]
struct State {
    get_responses: VecDeque<Result<Value, ApiError>>,
    post_responses: VecDeque<Result<Value, ApiError>>,
    gets: Vec<RecordedGet>,
    posts: Vec<RecordedPost>,
}

/// Answers requests from queued responses in FIFO order.
///
/// An unscripted call fails with `ApiError::RequestFailed`.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<State>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push_get(&self, response: Result<Value, ApiError>) -> &Self {
        self.lock().get_responses.push_back(response);
        self
    }

    pub fn push_post(&self, response: Result<Value, ApiError>) -> &Self {
        self.lock().post_responses.push_back(response);
        self
    }

    pub fn gets(&self) -> Vec<RecordedGet> {
        self.lock().gets.clone()
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.lock().posts.clone()
    }
}

fn unscripted(method: &str, path: &str) -> ApiError {
    ApiError::RequestFailed(format!("no scripted response for {} {}", method, path))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for FakeApi {
    async fn get_json(&self, path: &str, headers: &[(String, String)]) -> Result<Value, ApiError> {
        let mut state = self.lock();
        state.gets.push(RecordedGet {
            path: path.to_string(),
            headers: headers.to_vec(),
        });
        state
            .get_responses
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("GET", path)))
    }

    async fn post_multipart(
        &self,
        path: &str,
        payload: &SubmissionPayload,
    ) -> Result<Value, ApiError> {
        let mut state = self.lock();
        state.posts.push(RecordedPost {
            path: path.to_string(),
            payload: payload.clone(),
        });
        state
            .post_responses
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("POST", path)))
    }
}
