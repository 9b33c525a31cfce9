//! Test doubles for outbound ports
//!
//! Available in unit tests and, for downstream crates, behind the `testing`
//! feature. `MockPlatformPort` is generated by mockall next to the trait.

#[cfg(any(test, feature = "testing"))]
mod fake_api;
#[cfg(any(test, feature = "testing"))]
pub mod fixtures;

#[cfg(any(test, feature = "testing"))]
pub use fake_api::{FakeApi, RecordedGet, RecordedPost};
