//! Entities of the extraction update form

mod form;
mod service_option;

pub use form::{FormFields, TextField, CUSTOMER_TYPE_FIELD, PERSONAL_SUBTYPE_FIELD};
pub use service_option::{
    OptionGroup, OptionKey, OptionKind, OptionLayout, RenderedOption, SectionLabel,
    ServiceCatalog, ServiceOption, ADDON_BADGE, SERVICES_FIELD,
};
