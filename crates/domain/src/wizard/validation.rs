//! Per-step validators
//!
//! Validators read the form as it is and either return what the step
//! contributes to the bookkeeping, or one aggregated error. Nothing is
//! recorded unless every check of the step passes.

use crate::entities::{FormFields, TextField};
use crate::error::ValidationError;
use crate::value_objects::{CustomerType, CustomerTypeSelection, Step};

use super::state::ErrorSlot;

pub const MISSING_CUSTOMER_TYPE: &str = "Please select a customer type";
pub const MISSING_PERSONAL_SUBTYPE: &str = "Please specify if you are the owner or driver";
pub const MISSING_ORGANIZATION_DETAILS: &str = "Organization name and tax number are required";
pub const MISSING_CUSTOMER_NAME: &str = "Customer name is required";
pub const MISSING_PHONE: &str = "Phone number is required";

/// What a passing step contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    CustomerType(CustomerTypeSelection),
    Services,
    ExtractedData,
}

pub fn validate_step(step: Step, fields: &FormFields) -> Result<StepOutcome, ValidationError> {
    match step {
        Step::CustomerType => validate_customer_type(fields).map(StepOutcome::CustomerType),
        // Services are optional
        Step::Services => Ok(StepOutcome::Services),
        Step::ExtractedData => validate_extracted_data(fields).map(|()| StepOutcome::ExtractedData),
    }
}

pub fn validate_customer_type(
    fields: &FormFields,
) -> Result<CustomerTypeSelection, ValidationError> {
    let customer_type = fields
        .customer_type
        .as_ref()
        .ok_or_else(|| ValidationError::new(ErrorSlot::General, MISSING_CUSTOMER_TYPE))?;

    match customer_type {
        CustomerType::Personal => {
            let subtype = fields.personal_subtype.ok_or_else(|| {
                ValidationError::new(ErrorSlot::General, MISSING_PERSONAL_SUBTYPE)
            })?;
            Ok(CustomerTypeSelection::Personal { subtype })
        }
        CustomerType::Organization(kind) => {
            let name = fields.trimmed(&TextField::OrganizationName);
            let tax_number = fields.trimmed(&TextField::TaxNumber);
            match (name, tax_number) {
                (Some(name), Some(tax_number)) => Ok(CustomerTypeSelection::Organization {
                    kind: kind.clone(),
                    name: name.to_string(),
                    tax_number: tax_number.to_string(),
                }),
                _ => Err(ValidationError::new(
                    ErrorSlot::General,
                    MISSING_ORGANIZATION_DETAILS,
                )),
            }
        }
    }
}

/// Name and phone are checked independently so both failures are reported.
pub fn validate_extracted_data(fields: &FormFields) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if fields.trimmed(&TextField::CustomerName).is_none() {
        errors.push(MISSING_CUSTOMER_NAME.to_string());
    }

    if fields.trimmed(&TextField::Phone).is_none() {
        errors.push(MISSING_PHONE.to_string());
    }

    match ValidationError::from_messages(ErrorSlot::Data, errors) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
