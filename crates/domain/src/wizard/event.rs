//! Messages into the wizard and the side effects it asks for

use crate::entities::{OptionKey, ServiceCatalog, TextField};
use crate::value_objects::{CustomerType, PersonalSubtype};

use super::payload::SubmissionPayload;
use super::state::WizardState;

/// Everything that can happen to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Reset and show the modal
    Open,
    /// Hide the modal, keeping its contents
    Close,
    /// Cancel button: reset and hide
    Cancel,
    /// Customer type option clicked or its radio changed
    SelectCustomerType(CustomerType),
    SelectPersonalSubtype(PersonalSubtype),
    EditField {
        field: TextField,
        value: String,
    },
    ToggleService {
        key: OptionKey,
        checked: bool,
    },
    Next,
    Previous,
    Submit,
    /// Completion of [`WizardEffect::FetchCatalog`]
    CatalogLoaded(Result<ServiceCatalog, String>),
    /// Completion of [`WizardEffect::Submit`]
    SubmissionCompleted(Result<UpdateOutcome, String>),
    DismissBanner,
}

/// Application-level answer of the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    Rejected { error: Option<String> },
}

/// Work the wizard cannot do itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEffect {
    FetchCatalog { csrf_token: Option<String> },
    Submit(SubmissionPayload),
    ReloadPage { delay_ms: u64 },
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub effects: Vec<WizardEffect>,
}

impl Transition {
    pub fn new(state: WizardState, effects: Vec<WizardEffect>) -> Self {
        Self { state, effects }
    }

    pub fn into_parts(self) -> (WizardState, Vec<WizardEffect>) {
        (self.state, self.effects)
    }
}
