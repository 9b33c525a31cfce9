//! Tracker Domain - the extraction wizard model
//!
//! Pure types and transitions for the multi-step form that corrects an
//! order from extracted document data. This crate performs no I/O.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;
pub mod wizard;

pub use entities::{
    FormFields, OptionGroup, OptionKey, OptionKind, OptionLayout, RenderedOption, SectionLabel,
    ServiceCatalog, ServiceOption, TextField, ADDON_BADGE, CUSTOMER_TYPE_FIELD,
    PERSONAL_SUBTYPE_FIELD, SERVICES_FIELD,
};
pub use error::{DomainError, ValidationError};
pub use ids::ServiceOptionId;
pub use value_objects::{CustomerType, CustomerTypeSelection, OrderType, PersonalSubtype, Step};
pub use wizard::{
    ErrorSlot, OptionsPanel, SubmissionPayload, SubmitStatus, Transition, UpdateOutcome,
    WizardContext, WizardEffect, WizardEvent, WizardState,
};
