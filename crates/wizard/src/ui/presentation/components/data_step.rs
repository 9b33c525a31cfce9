//! Step 3: extracted customer data

use dioxus::prelude::*;

use tracker_domain::{ErrorSlot, Step, TextField};

use super::common::{display, ErrorAlert, FieldInput};
use crate::presentation::state::use_wizard_state;

#[component]
pub fn ExtractedDataStep() -> Element {
    let state = use_wizard_state();
    let s = state.read();
    let step = Step::ExtractedData;

    let fields: Vec<TextField> = TextField::EXTRACTED_DATA
        .iter()
        .cloned()
        .chain(s.fields().other_fields())
        .collect();

    rsx! {
        div {
            id: step.panel_id(),
            class: "extraction-step",
            style: display(s.is_panel_visible(step)),

            ErrorAlert { slot: ErrorSlot::Data }

            for field in fields {
                FieldInput {
                    key: "{field}",
                    required: field.is_required(),
                    field: field.clone(),
                }
            }
        }
    }
}
