//! Application layer: page context, services and effect execution
//!
//! Services talk to the backend through `RawApiPort`. The executor turns
//! wizard effects into completion events and the controller feeds those
//! back into the state machine.

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod executor;
pub mod services;

pub use config::WizardConfig;
pub use context::PageContext;
pub use controller::{WizardController, WizardStore};
pub use error::ServiceError;
pub use executor::EffectExecutor;
pub use services::{CatalogService, SubmissionService};
