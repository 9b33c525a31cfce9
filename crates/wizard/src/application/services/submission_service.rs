//! Submission Service - posts the corrected order data

use std::sync::Arc;

use tracker_domain::{SubmissionPayload, UpdateOutcome};
use tracker_shared::{UpdateResponse, UPDATE_FROM_EXTRACTION_PATH};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

#[derive(Clone)]
pub struct SubmissionService {
    api: Arc<dyn RawApiPort>,
}

impl SubmissionService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<UpdateOutcome, ServiceError> {
        let value = self
            .api
            .post_multipart(UPDATE_FROM_EXTRACTION_PATH, payload)
            .await?;
        let outcome = UpdateResponse::from_value(value)?.into_outcome();

        match &outcome {
            UpdateOutcome::Updated => tracing::info!("Order updated from extraction"),
            UpdateOutcome::Rejected { error } => {
                tracing::warn!(error = ?error, "Order update rejected")
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, FakeApi};

    fn payload() -> SubmissionPayload {
        let mut payload = SubmissionPayload::new();
        payload.append("order_id", "42");
        payload.set("extracted_services", "Wash,Wax");
        payload
    }

    #[tokio::test]
    async fn posts_payload_to_update_endpoint() {
        let api = FakeApi::new();
        api.push_post(Ok(fixtures::update_succeeded()));
        let service = SubmissionService::new(Arc::new(api.clone()));

        let outcome = service.submit(&payload()).await.unwrap();

        assert_eq!(outcome, UpdateOutcome::Updated);
        let posts = api.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].path, UPDATE_FROM_EXTRACTION_PATH);
        assert_eq!(posts[0].payload.get("extracted_services"), Some("Wash,Wax"));
    }

    #[tokio::test]
    async fn rejection_carries_server_message() {
        let api = FakeApi::new();
        api.push_post(Ok(fixtures::update_rejected("Order locked")));
        let service = SubmissionService::new(Arc::new(api));

        let outcome = service.submit(&payload()).await.unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome::Rejected {
                error: Some("Order locked".to_string())
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let api = FakeApi::new();
        api.push_post(Err(fixtures::api_request_failed("connection reset")));
        let service = SubmissionService::new(Arc::new(api));

        let err = service.submit(&payload()).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed: connection reset");
    }
}
