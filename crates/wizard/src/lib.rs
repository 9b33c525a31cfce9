//! Tracker extraction wizard client.
//!
//! This crate contains UI, application logic, and infrastructure adapters.
//! Multi-platform support (web page embed, desktop window) is provided via
//! compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::{app, MODAL_ROOT_ID};
