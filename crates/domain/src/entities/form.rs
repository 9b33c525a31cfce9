//! Form field values of the extraction update form
//!
//! Field values start from what the extractor found on the source document
//! and are edited by the user. Resetting the form restores those seeded
//! values, not blanks.

use std::collections::BTreeMap;
use std::fmt;

use crate::value_objects::{CustomerType, PersonalSubtype};

pub const CUSTOMER_TYPE_FIELD: &str = "extracted_customer_type";
pub const PERSONAL_SUBTYPE_FIELD: &str = "extracted_personal_subtype";

/// Prefix shared by every field of the update form.
const FIELD_PREFIX: &str = "extracted_";

/// A free-text input of the update form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextField {
    OrganizationName,
    TaxNumber,
    CustomerName,
    Phone,
    Email,
    Address,
    Reference,
    /// Any other extracted field rendered by the page
    Other(String),
}

impl TextField {
    /// Fields shown on the extracted data step, in display order.
    pub const EXTRACTED_DATA: [TextField; 5] = [
        TextField::CustomerName,
        TextField::Phone,
        TextField::Email,
        TextField::Address,
        TextField::Reference,
    ];

    pub fn form_name(&self) -> &str {
        match self {
            TextField::OrganizationName => "extracted_organization_name",
            TextField::TaxNumber => "extracted_tax_number",
            TextField::CustomerName => "extracted_customer_name",
            TextField::Phone => "extracted_phone",
            TextField::Email => "extracted_email",
            TextField::Address => "extracted_address",
            TextField::Reference => "extracted_reference",
            TextField::Other(name) => name,
        }
    }

    pub fn from_form_name(name: &str) -> Self {
        match name {
            "extracted_organization_name" => TextField::OrganizationName,
            "extracted_tax_number" => TextField::TaxNumber,
            "extracted_customer_name" => TextField::CustomerName,
            "extracted_phone" => TextField::Phone,
            "extracted_email" => TextField::Email,
            "extracted_address" => TextField::Address,
            "extracted_reference" => TextField::Reference,
            other => TextField::Other(other.to_string()),
        }
    }

    /// Map a key of the extractor's header (`customer_name`, `phone`, ...)
    /// to its form field.
    pub fn from_header_key(key: &str) -> Self {
        let key = key.trim();
        if key.starts_with(FIELD_PREFIX) {
            Self::from_form_name(key)
        } else {
            Self::from_form_name(&format!("{FIELD_PREFIX}{key}"))
        }
    }

    pub fn label(&self) -> String {
        match self {
            TextField::OrganizationName => "Organization Name".to_string(),
            TextField::TaxNumber => "Tax Number (TIN)".to_string(),
            TextField::CustomerName => "Customer Name".to_string(),
            TextField::Phone => "Phone".to_string(),
            TextField::Email => "Email".to_string(),
            TextField::Address => "Address".to_string(),
            TextField::Reference => "Reference".to_string(),
            TextField::Other(name) => {
                let bare = name.strip_prefix(FIELD_PREFIX).unwrap_or(name);
                bare.split('_')
                    .filter(|part| !part.is_empty())
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, TextField::CustomerName | TextField::Phone)
    }

    pub fn is_organization_only(&self) -> bool {
        matches!(self, TextField::OrganizationName | TextField::TaxNumber)
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Current values of every input of the update form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub customer_type: Option<CustomerType>,
    pub personal_subtype: Option<PersonalSubtype>,
    text: BTreeMap<TextField, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed inputs from extractor header values. Blank values are skipped, and
    /// radio values that do not parse leave the radio unchecked.
    pub fn from_extraction<'a>(header: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut fields = Self::new();
        for (key, value) in header {
            if value.trim().is_empty() {
                continue;
            }
            match key.trim() {
                "customer_type" | CUSTOMER_TYPE_FIELD => {
                    fields.customer_type = value.parse().ok();
                }
                "personal_subtype" | PERSONAL_SUBTYPE_FIELD => {
                    fields.personal_subtype = value.parse().ok();
                }
                _ => fields.set(TextField::from_header_key(key), value),
            }
        }
        fields
    }

    pub fn with_text(mut self, field: TextField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &TextField) -> &str {
        self.text.get(field).map(String::as_str).unwrap_or("")
    }

    /// Value after trimming, or `None` when blank.
    pub fn trimmed(&self, field: &TextField) -> Option<&str> {
        let value = self.get(field).trim();
        (!value.is_empty()).then_some(value)
    }

    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        self.text.insert(field, value.into());
    }

    pub fn clear(&mut self, field: &TextField) {
        if let Some(value) = self.text.get_mut(field) {
            value.clear();
        }
    }

    /// Every text input in a stable order.
    pub fn text_fields(&self) -> impl Iterator<Item = (&TextField, &str)> {
        self.text.iter().map(|(field, value)| (field, value.as_str()))
    }

    /// Extracted fields beyond the known ones, for display on the data step.
    pub fn other_fields(&self) -> Vec<TextField> {
        self.text
            .keys()
            .filter(|field| matches!(field, TextField::Other(_)))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_keys_map_to_form_fields() {
        assert_eq!(TextField::from_header_key("customer_name"), TextField::CustomerName);
        assert_eq!(TextField::from_header_key("phone"), TextField::Phone);
        assert_eq!(
            TextField::from_header_key("invoice_no"),
            TextField::Other("extracted_invoice_no".to_string())
        );
        assert_eq!(
            TextField::from_header_key("extracted_email"),
            TextField::Email
        );
    }

    #[test]
    fn seeding_skips_blank_values() {
        let fields = FormFields::from_extraction([
            ("customer_name", "Jane Doe"),
            ("phone", "  "),
            ("invoice_no", "PI-77"),
        ]);

        assert_eq!(fields.get(&TextField::CustomerName), "Jane Doe");
        assert_eq!(fields.trimmed(&TextField::Phone), None);
        assert_eq!(
            fields.other_fields(),
            vec![TextField::Other("extracted_invoice_no".to_string())]
        );
    }

    #[test]
    fn seeding_checks_radios() {
        let fields = FormFields::from_extraction([
            ("customer_type", "personal"),
            ("personal_subtype", "driver"),
            ("extracted_customer_type", "personal"),
        ]);

        assert_eq!(fields.customer_type, Some(CustomerType::Personal));
        assert_eq!(fields.personal_subtype, Some(PersonalSubtype::Driver));
        assert_eq!(fields.text_fields().count(), 0);
    }

    #[test]
    fn clear_keeps_the_input_but_empties_it() {
        let mut fields = FormFields::new().with_text(TextField::TaxNumber, "123");
        fields.clear(&TextField::TaxNumber);

        assert_eq!(fields.get(&TextField::TaxNumber), "");
        assert_eq!(fields.text_fields().count(), 1);
    }

    #[test]
    fn labels_for_other_fields() {
        let field = TextField::Other("extracted_invoice_no".to_string());
        assert_eq!(field.label(), "Invoice No");
    }

    #[test]
    fn trimmed_returns_inner_value() {
        let fields = FormFields::new().with_text(TextField::CustomerName, "  Ann ");
        assert_eq!(fields.trimmed(&TextField::CustomerName), Some("Ann"));
    }
}
