use dioxus::prelude::*;

use tracker_domain::WizardEvent;

use crate::application::WizardController;

pub mod presentation;

use presentation::components::ExtractionFormModal;
use presentation::services::WizardServices;
use presentation::state::{send_event, use_send};

/// Element the wizard mounts into on the order page.
pub const MODAL_ROOT_ID: &str = "extractionFormModal";

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/wizard/src/main.rs`).
    let services = use_context::<WizardServices>();

    let state = use_signal(|| services.page.initial_state());
    let executor = services.executor.clone();
    let controller = use_hook(move || WizardController::new(state, executor));
    use_context_provider(|| state);
    use_context_provider({
        let controller = controller.clone();
        move || controller
    });

    let open_on_start = services.config.open_on_start;
    use_effect(move || {
        if open_on_start {
            send_event(&controller, WizardEvent::Open);
        }
    });

    rsx! {
        LaunchButton {}
        ExtractionFormModal {}
    }
}

#[component]
fn LaunchButton() -> Element {
    let send = use_send();

    rsx! {
        button {
            id: "openExtractionFormBtn",
            r#type: "button",
            class: "btn btn-outline-primary btn-sm",
            onclick: move |_| send.call(WizardEvent::Open),
            "Review Extracted Data"
        }
    }
}
