//! Effect executor
//!
//! Runs the side effects a wizard transition asks for and reports their
//! completion as the event to feed back into the state machine.

use std::sync::Arc;

use tracker_domain::{WizardEffect, WizardEvent};

use super::services::{CatalogService, SubmissionService};
use crate::ports::outbound::{PlatformPort, RawApiPort};

#[derive(Clone)]
pub struct EffectExecutor {
    catalog: CatalogService,
    submission: SubmissionService,
    platform: Arc<dyn PlatformPort>,
}

impl EffectExecutor {
    pub fn new(api: Arc<dyn RawApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            catalog: CatalogService::new(api.clone()),
            submission: SubmissionService::new(api),
            platform,
        }
    }

    /// Execute one effect. Returns the follow-up event, if any.
    pub async fn execute(&self, effect: WizardEffect) -> Option<WizardEvent> {
        match effect {
            WizardEffect::FetchCatalog { csrf_token } => {
                let result = self.catalog.load(csrf_token.as_deref()).await;
                if let Err(e) = &result {
                    tracing::error!(error = %e, "Failed to load service options");
                }
                Some(WizardEvent::CatalogLoaded(result.map_err(|e| e.to_string())))
            }
            WizardEffect::Submit(payload) => {
                tracing::info!(fields = payload.len(), "Submitting extraction update");
                let result = self.submission.submit(&payload).await;
                if let Err(e) = &result {
                    tracing::error!(error = %e, "Extraction update failed");
                }
                Some(WizardEvent::SubmissionCompleted(
                    result.map_err(|e| e.to_string()),
                ))
            }
            WizardEffect::ReloadPage { delay_ms } => {
                self.platform.sleep_ms(delay_ms).await;
                if self.platform.reload_page() {
                    None
                } else {
                    tracing::info!("No page to reload; closing the wizard");
                    Some(WizardEvent::Close)
                }
            }
        }
    }
}
