//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the backend and the host page
//! without depending on concrete implementations.

pub mod platform_port;
pub mod raw_api_port;

pub use platform_port::PlatformPort;
pub use raw_api_port::{ApiError, RawApiPort};

#[cfg(any(test, feature = "testing"))]
pub use platform_port::MockPlatformPort;
