//! Step 2: service and add-on checkboxes

use dioxus::prelude::*;

use tracker_domain::wizard::{OptionsPanel, LOADING_OPTIONS_TEXT, OPTIONS_FAILED_TEXT};
use tracker_domain::{OptionLayout, OrderType, RenderedOption, SectionLabel, Step, WizardEvent};

use super::common::display;
use crate::presentation::state::{use_send, use_wizard_state};

/// Heading shown above the list, also while it loads.
fn section_label(order_type: OrderType) -> SectionLabel {
    if order_type.is_sales() {
        SectionLabel::AddOns
    } else {
        SectionLabel::Services
    }
}

/// Rows of the list: checkboxes, with a divider before every group but the first.
#[derive(Debug, Clone, PartialEq)]
enum Row {
    Divider,
    Option(RenderedOption),
}

fn rows(layout: &OptionLayout) -> Vec<Row> {
    let mut rows = Vec::new();
    for (index, group) in layout.groups.iter().enumerate() {
        if index > 0 {
            rows.push(Row::Divider);
        }
        rows.extend(group.entries().map(Row::Option));
    }
    rows
}

#[component]
pub fn ServicesStep() -> Element {
    let state = use_wizard_state();
    let s = state.read();
    let step = Step::Services;
    let label = section_label(s.context().order_type).text();

    let body = match s.options() {
        OptionsPanel::Idle => rsx! {},
        OptionsPanel::Loading => rsx! {
            div { class: "col-12 text-muted", {LOADING_OPTIONS_TEXT} }
        },
        OptionsPanel::Failed => rsx! {
            div { class: "text-danger col-12", {OPTIONS_FAILED_TEXT} }
        },
        OptionsPanel::Loaded(layout) => {
            let items = rows(layout).into_iter().enumerate().map(|(index, row)| match row {
                Row::Divider => rsx! {
                    div { key: "divider-{index}", class: "col-12", hr { class: "my-2" } }
                },
                Row::Option(entry) => {
                    let checked = s.is_selected(&entry.key);
                    let element_id = entry.element_id.clone();
                    rsx! {
                        ServiceCheckbox { key: "{element_id}", entry: entry, checked: checked }
                    }
                }
            });
            rsx! { {items} }
        }
    };

    rsx! {
        div {
            id: step.panel_id(),
            class: "extraction-step",
            style: display(s.is_panel_visible(step)),

            label { id: "servicesLabel", class: "form-label", "{label}" }
            div { id: "extractionServicesContainer", class: "row g-2",
                {body}
            }
        }
    }
}

#[component]
fn ServiceCheckbox(entry: RenderedOption, checked: bool) -> Element {
    let send = use_send();
    let key = entry.key.clone();
    let element_id = entry.element_id.clone();
    let value = entry.value.clone();

    rsx! {
        div { class: "col-md-6",
            div { class: "form-check",
                input {
                    id: "{element_id}",
                    r#type: "checkbox",
                    class: "form-check-input extraction-service-checkbox",
                    name: entry.field_name,
                    value: "{value}",
                    checked: checked,
                    onchange: move |e| {
                        send.call(WizardEvent::ToggleService {
                            key: key.clone(),
                            checked: e.checked(),
                        })
                    },
                }
                label { class: "form-check-label", r#for: "{element_id}",
                    "{value}"
                    if let Some(badge) = entry.badge {
                        span { class: "badge bg-info ms-1", "{badge}" }
                    }
                }
            }
        }
    }
}
