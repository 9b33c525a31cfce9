//! Extraction wizard state machine
//!
//! Three linear steps (customer type, services, extracted data) driven by
//! [`WizardEvent`]s. Network calls, timers and page reloads are returned as
//! [`WizardEffect`]s for the caller to execute.

mod event;
mod machine;
mod payload;
mod state;
pub mod validation;

pub use event::{Transition, UpdateOutcome, WizardEffect, WizardEvent};
pub use machine::SUBMIT_REJECTED_FALLBACK;
pub use payload::{SubmissionPayload, CSRF_FIELD, ORDER_ID_FIELD};
pub use state::{
    ButtonVisibility, CollectedFields, ErrorSlot, ErrorSlots, OptionsPanel, SubmitStatus,
    WizardContext, WizardState, LOADING_OPTIONS_TEXT, OPTIONS_FAILED_TEXT, RELOAD_DELAY_MS,
    SUBMIT_BUSY_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE,
};
