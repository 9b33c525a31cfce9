//! Service bundle provided to the UI by the composition root
//!
//! Components reach the application layer through context rather than
//! constructing adapters themselves.

use crate::application::{EffectExecutor, PageContext, WizardConfig};

#[derive(Clone)]
pub struct WizardServices {
    pub executor: EffectExecutor,
    pub page: PageContext,
    pub config: WizardConfig,
}

impl WizardServices {
    pub fn new(executor: EffectExecutor, page: PageContext, config: WizardConfig) -> Self {
        Self {
            executor,
            page,
            config,
        }
    }
}
