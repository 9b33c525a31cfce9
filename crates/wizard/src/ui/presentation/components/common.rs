//! Small pieces shared by the step panels

use dioxus::prelude::*;

use tracker_domain::{ErrorSlot, TextField, WizardEvent};

use crate::presentation::state::{use_send, use_wizard_state};

/// Inline style that hides an element without removing it.
pub fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "display: none;"
    }
}

/// Error area of one slot. Hidden while the slot is empty.
#[component]
pub fn ErrorAlert(slot: ErrorSlot) -> Element {
    let state = use_wizard_state();
    let message = state.read().error(slot).map(str::to_string);
    let visible = message.is_some();

    rsx! {
        div {
            id: slot.element_id(),
            class: "alert alert-danger py-2",
            role: "alert",
            style: display(visible),
            span { {message.unwrap_or_default()} }
        }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    let send = use_send();

    rsx! {
        div {
            id: "extractionSuccessMessage",
            class: "alert alert-success alert-dismissible",
            role: "alert",
            "{message}"
            button {
                r#type: "button",
                class: "btn-close",
                onclick: move |_| send.call(WizardEvent::DismissBanner),
            }
        }
    }
}

/// Labelled text input bound to one form field.
#[component]
pub fn FieldInput(field: TextField, required: bool) -> Element {
    let state = use_wizard_state();
    let send = use_send();

    let value = state.read().field(&field).to_string();
    let name = field.form_name().to_string();
    let label = field.label();
    let input_id = format!("id_{}", name);

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: "{input_id}",
                "{label}"
                if required {
                    span { class: "text-danger", " *" }
                }
            }
            input {
                id: "{input_id}",
                r#type: "text",
                class: "form-control",
                name: "{name}",
                value: "{value}",
                oninput: move |e| {
                    send.call(WizardEvent::EditField {
                        field: field.clone(),
                        value: e.value(),
                    })
                },
            }
        }
    }
}
