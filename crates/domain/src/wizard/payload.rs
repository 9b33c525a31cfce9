//! Multipart body of the update request

use serde::Serialize;

use crate::entities::{TextField, CUSTOMER_TYPE_FIELD, PERSONAL_SUBTYPE_FIELD, SERVICES_FIELD};
use crate::value_objects::CustomerType;

use super::state::WizardState;

pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const ORDER_ID_FIELD: &str = "order_id";

/// Ordered form fields. A name may repeat unless overwritten with [`set`].
///
/// [`set`]: SubmissionPayload::set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Replace every field with this name by a single entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Mirror the form: hidden context fields, checked radios, the inputs of
    /// the active customer section, the extracted data inputs, and checked
    /// service checkboxes folded into one comma-joined field.
    pub fn from_state(state: &WizardState) -> Self {
        let mut payload = Self::new();
        let context = state.context();
        let fields = state.fields();

        if let Some(token) = &context.csrf_token {
            payload.append(CSRF_FIELD, token.clone());
        }
        payload.append(ORDER_ID_FIELD, context.order_id.clone());

        let customer_type = fields.customer_type.as_ref();
        if let Some(customer_type) = customer_type {
            payload.append(CUSTOMER_TYPE_FIELD, customer_type.as_value());
        }
        match customer_type {
            Some(CustomerType::Personal) => {
                if let Some(subtype) = fields.personal_subtype {
                    payload.append(PERSONAL_SUBTYPE_FIELD, subtype.as_value());
                }
            }
            Some(CustomerType::Organization(_)) => {
                payload.append(
                    TextField::OrganizationName.form_name(),
                    fields.get(&TextField::OrganizationName),
                );
                payload.append(
                    TextField::TaxNumber.form_name(),
                    fields.get(&TextField::TaxNumber),
                );
            }
            None => {}
        }

        for (field, value) in fields.text_fields() {
            if field.is_organization_only() {
                continue;
            }
            payload.append(field.form_name(), value);
        }

        payload.set(SERVICES_FIELD, state.selected_names().join(","));

        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FormFields;
    use crate::value_objects::{OrderType, PersonalSubtype};
    use crate::wizard::state::WizardContext;

    fn state_with(fields: FormFields) -> WizardState {
        let context = WizardContext::new("42", OrderType::Service).with_csrf_token("tok");
        WizardState::new(context, fields)
    }

    #[test]
    fn set_replaces_repeated_fields() {
        let mut payload = SubmissionPayload::new();
        payload.append("extracted_services", "Wash");
        payload.append("extracted_services", "Wax");
        payload.set("extracted_services", "Wash,Wax");

        assert_eq!(payload.get_all("extracted_services"), vec!["Wash,Wax"]);
    }

    #[test]
    fn personal_payload_omits_organization_fields() {
        let mut fields = FormFields::new()
            .with_text(TextField::OrganizationName, "")
            .with_text(TextField::CustomerName, "Jane")
            .with_text(TextField::Phone, "0712");
        fields.customer_type = Some(CustomerType::Personal);
        fields.personal_subtype = Some(PersonalSubtype::Owner);

        let payload = SubmissionPayload::from_state(&state_with(fields));

        assert_eq!(payload.get(CSRF_FIELD), Some("tok"));
        assert_eq!(payload.get(ORDER_ID_FIELD), Some("42"));
        assert_eq!(payload.get("extracted_customer_type"), Some("personal"));
        assert_eq!(payload.get("extracted_personal_subtype"), Some("owner"));
        assert!(!payload.contains("extracted_organization_name"));
        assert!(!payload.contains("extracted_tax_number"));
        assert_eq!(payload.get("extracted_customer_name"), Some("Jane"));
        assert_eq!(payload.get("extracted_services"), Some(""));
    }

    #[test]
    fn organization_payload_omits_subtype() {
        let mut fields = FormFields::new()
            .with_text(TextField::OrganizationName, "Acme")
            .with_text(TextField::TaxNumber, "9")
            .with_text(TextField::Other("extracted_invoice_no".to_string()), "PI-1");
        fields.customer_type = Some(CustomerType::Organization("company".to_string()));
        fields.personal_subtype = Some(PersonalSubtype::Driver);

        let payload = SubmissionPayload::from_state(&state_with(fields));

        assert_eq!(payload.get("extracted_customer_type"), Some("company"));
        assert!(!payload.contains("extracted_personal_subtype"));
        assert_eq!(payload.get_all("extracted_organization_name"), vec!["Acme"]);
        assert_eq!(payload.get("extracted_tax_number"), Some("9"));
        assert_eq!(payload.get("extracted_invoice_no"), Some("PI-1"));
    }
}
