//! Page context the wizard is constructed from
//!
//! The order page embeds the order id, order type, anti-forgery token and
//! the extractor's header as hidden inputs. Without an order id there is
//! nothing to update and the wizard is not initialized.

use tracker_domain::{FormFields, OrderType, WizardContext, WizardState};
use tracker_shared::{page_fields, ExtractionHeader};

use super::config::WizardConfig;
use crate::ports::outbound::PlatformPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub wizard: WizardContext,
    /// Initial input values; reset restores these
    pub seed: FormFields,
}

impl PageContext {
    /// Read the context from the host page. Returns `None` when the page
    /// carries no order id.
    pub fn load(platform: &dyn PlatformPort, config: &WizardConfig) -> Option<Self> {
        let order_id = platform
            .hidden_field(page_fields::ORDER_ID)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        let Some(order_id) = order_id else {
            tracing::info!("No order id on page; extraction wizard not initialized");
            return None;
        };

        let order_type =
            OrderType::from_field(platform.hidden_field(page_fields::ORDER_TYPE).as_deref());

        let mut wizard = WizardContext::new(order_id, order_type)
            .with_reload_delay_ms(config.reload_delay_ms);
        if let Some(token) = platform.hidden_field(page_fields::CSRF_TOKEN) {
            wizard = wizard.with_csrf_token(token);
        }

        let seed = platform
            .hidden_field(page_fields::EXTRACTION_HEADER)
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match ExtractionHeader::parse(&raw) {
                Ok(header) => Some(FormFields::from_extraction(header.iter())),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unreadable extraction header");
                    None
                }
            })
            .unwrap_or_default();

        tracing::debug!(
            order_id = %wizard.order_id,
            order_type = wizard.order_type.as_str(),
            has_token = wizard.csrf_token.is_some(),
            "Loaded page context"
        );

        Some(Self { wizard, seed })
    }

    pub fn initial_state(&self) -> WizardState {
        WizardState::new(self.wizard.clone(), self.seed.clone())
    }
}
