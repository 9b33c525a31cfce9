//! Wizard components

mod common;
mod customer_type_step;
mod data_step;
mod extraction_modal;
mod services_step;

pub use common::{display, ErrorAlert, FieldInput, SuccessBanner};
pub use customer_type_step::CustomerTypeStep;
pub use data_step::ExtractedDataStep;
pub use extraction_modal::ExtractionFormModal;
pub use services_step::ServicesStep;
