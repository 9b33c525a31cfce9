//! Step 1: customer type, personal subtype and organization details

use dioxus::prelude::*;

use tracker_domain::{
    CustomerType, ErrorSlot, PersonalSubtype, Step, TextField, WizardEvent, CUSTOMER_TYPE_FIELD,
    PERSONAL_SUBTYPE_FIELD,
};

use super::common::{display, ErrorAlert, FieldInput};
use crate::presentation::state::{use_send, use_wizard_state};

/// Radio values offered by the order page, with their labels.
pub const CUSTOMER_TYPE_CHOICES: [(&str, &str); 4] = [
    (CustomerType::PERSONAL, "Personal"),
    ("company", "Company"),
    ("government", "Government"),
    ("ngo", "NGO"),
];

#[component]
pub fn CustomerTypeStep() -> Element {
    let state = use_wizard_state();
    let s = state.read();
    let step = Step::CustomerType;
    let subtypes = PersonalSubtype::ALL.map(|subtype| (subtype.as_value(), subtype));

    rsx! {
        div {
            id: step.panel_id(),
            class: "extraction-step",
            style: display(s.is_panel_visible(step)),

            ErrorAlert { slot: ErrorSlot::General }

            div { class: "row g-2 mb-3",
                for (value, text) in CUSTOMER_TYPE_CHOICES {
                    CustomerTypeOption {
                        key: "{value}",
                        value: value.to_string(),
                        label: text.to_string(),
                        checked: s.checked_customer_type().map(|t| t.as_value()) == Some(value),
                    }
                }
            }

            div {
                class: "personal-subtype-section-extraction mb-3",
                style: display(s.personal_section_visible()),
                label { class: "form-label d-block", "Are you the owner or the driver?" }
                for (value, subtype) in subtypes {
                    SubtypeRadio {
                        key: "{value}",
                        subtype: subtype,
                        checked: s.fields().personal_subtype == Some(subtype),
                    }
                }
            }

            div {
                class: "org-details-section-extraction",
                style: display(s.organization_section_visible()),
                FieldInput { field: TextField::OrganizationName, required: true }
                FieldInput { field: TextField::TaxNumber, required: true }
            }
        }
    }
}

/// Clickable card wrapping one customer-type radio.
#[component]
fn CustomerTypeOption(value: String, label: String, checked: bool) -> Element {
    let send = use_send();
    let customer_type = value.parse::<CustomerType>().ok();
    let input_id = format!("extraction_ct_{}", value);
    let class = if checked {
        "customer-type-option-extraction card p-2 border-primary"
    } else {
        "customer-type-option-extraction card p-2"
    };

    let select = move || {
        if let Some(customer_type) = customer_type.clone() {
            send.call(WizardEvent::SelectCustomerType(customer_type));
        }
    };
    let on_click = select.clone();
    let on_change = select;

    rsx! {
        div { class: "col-6 col-md-3",
            div {
                class: "{class}",
                onclick: move |_| on_click(),
                input {
                    id: "{input_id}",
                    r#type: "radio",
                    class: "form-check-input me-2",
                    name: CUSTOMER_TYPE_FIELD,
                    value: "{value}",
                    checked: checked,
                    onchange: move |_| on_change(),
                }
                label { class: "form-check-label", r#for: "{input_id}", "{label}" }
            }
        }
    }
}

#[component]
fn SubtypeRadio(subtype: PersonalSubtype, checked: bool) -> Element {
    let send = use_send();
    let input_id = format!("extraction_subtype_{}", subtype.as_value());
    let label = subtype.label();

    rsx! {
        div { class: "form-check form-check-inline",
            input {
                id: "{input_id}",
                r#type: "radio",
                class: "form-check-input",
                name: PERSONAL_SUBTYPE_FIELD,
                value: subtype.as_value(),
                checked: checked,
                onchange: move |_| send.call(WizardEvent::SelectPersonalSubtype(subtype)),
            }
            label { class: "form-check-label", r#for: "{input_id}", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_parses() {
        for (value, _) in CUSTOMER_TYPE_CHOICES {
            let parsed: CustomerType = value.parse().unwrap();
            assert_eq!(parsed.as_value(), value);
        }
        assert!(CUSTOMER_TYPE_CHOICES[0].0 == CustomerType::PERSONAL);
    }
}
