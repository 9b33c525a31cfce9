//! Extraction Form Modal - three-step review of extracted order data

use dioxus::prelude::*;

use tracker_domain::{SubmitStatus, WizardEvent};

use super::common::{display, SuccessBanner};
use super::{CustomerTypeStep, ExtractedDataStep, ServicesStep};
use crate::presentation::state::{use_send, use_wizard_state};

#[component]
pub fn ExtractionFormModal() -> Element {
    let state = use_wizard_state();
    let send = use_send();
    let s = state.read();

    // Where the page cannot reload, the wizard closes after success and the
    // banner stays on the page.
    if !s.is_open() {
        let banner = s.banner().map(str::to_string);
        return rsx! {
            if let Some(message) = banner {
                SuccessBanner { message: message }
            }
        };
    }

    let buttons = s.buttons();
    let status = s.submit_status();
    let submit_label = status.label();
    let current = s.current_step();
    let total = s.total_steps();
    let title = s.step().title();
    let banner = s.banner().map(str::to_string);

    rsx! {
        div {
            class: "modal fade show d-block",
            tabindex: "-1",
            role: "dialog",
            style: "background: rgba(0, 0, 0, 0.5);",

            div { class: "modal-dialog modal-lg modal-dialog-scrollable",
                div { class: "modal-content",

                    // Header
                    div { class: "modal-header",
                        h5 { class: "modal-title", "Review Extracted Data" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            onclick: move |_| send.call(WizardEvent::Close),
                        }
                    }

                    div { class: "modal-body",
                        if let Some(message) = banner {
                            SuccessBanner { message: message }
                        }

                        p { class: "text-muted small mb-3",
                            "Step {current} of {total}: {title}"
                        }

                        form {
                            id: "extractionUpdateForm",
                            onsubmit: move |e| {
                                e.prevent_default();
                                send.call(WizardEvent::Submit);
                            },
                            CustomerTypeStep {}
                            ServicesStep {}
                            ExtractedDataStep {}
                        }
                    }

                    // Footer
                    div { class: "modal-footer",
                        button {
                            id: "extractionCancelBtn",
                            r#type: "button",
                            class: "btn btn-secondary me-auto",
                            onclick: move |_| send.call(WizardEvent::Cancel),
                            "Cancel"
                        }
                        button {
                            id: "extractionPrevBtn",
                            r#type: "button",
                            class: "btn btn-outline-secondary",
                            style: display(buttons.previous),
                            onclick: move |_| send.call(WizardEvent::Previous),
                            "Previous"
                        }
                        button {
                            id: "extractionNextBtn",
                            r#type: "button",
                            class: "btn btn-primary",
                            style: display(buttons.next),
                            onclick: move |_| send.call(WizardEvent::Next),
                            "Next"
                        }
                        button {
                            id: "extractionSubmitBtn",
                            r#type: "button",
                            class: "btn btn-success",
                            style: display(buttons.submit),
                            disabled: !status.is_enabled(),
                            onclick: move |_| send.call(WizardEvent::Submit),
                            if status == SubmitStatus::Submitting {
                                span { class: "spinner-border spinner-border-sm me-2" }
                            }
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
