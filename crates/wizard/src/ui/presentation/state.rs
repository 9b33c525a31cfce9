//! Reactive wizard state
//!
//! The wizard state lives in a `Signal` so every component re-renders from
//! the same snapshot after each transition.

use dioxus::prelude::*;

use tracker_domain::{WizardEffect, WizardEvent, WizardState};

use crate::application::{WizardController, WizardStore};

pub type UiController = WizardController<Signal<WizardState>>;

impl WizardStore for Signal<WizardState> {
    fn apply(&mut self, event: WizardEvent) -> Vec<WizardEffect> {
        let current = (*self.peek()).clone();
        let (next, effects) = current.handle(event).into_parts();
        self.set(next);
        effects
    }

    fn snapshot(&self) -> WizardState {
        (*self.peek()).clone()
    }
}

pub fn use_wizard_state() -> Signal<WizardState> {
    use_context::<Signal<WizardState>>()
}

pub fn use_controller() -> UiController {
    use_context::<UiController>()
}

/// Apply an event now and run each resulting effect as its own task.
pub fn send_event(controller: &UiController, event: WizardEvent) {
    let mut dispatcher = controller.clone();
    for effect in dispatcher.dispatch(event) {
        let mut runner = controller.clone();
        spawn(async move {
            runner.run_effect(effect).await;
        });
    }
}

/// Callback that feeds events into the wizard.
pub fn use_send() -> Callback<WizardEvent> {
    let controller = use_controller();
    use_callback(move |event: WizardEvent| send_event(&controller, event))
}
