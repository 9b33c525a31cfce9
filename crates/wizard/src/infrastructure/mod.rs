//! Infrastructure adapters
//!
//! The correct adapters are selected at compile time based on the target
//! architecture.

pub mod http_client;
pub mod platform;

pub mod testing;
