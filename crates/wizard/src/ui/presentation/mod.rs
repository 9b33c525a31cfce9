//! Presentation layer: Dioxus components and the hooks they share

pub mod components;
pub mod services;
pub mod state;

pub use services::WizardServices;
pub use state::{use_controller, use_send, use_wizard_state, UiController};
