//! HTTP adapters for [`RawApiPort`](crate::ports::outbound::RawApiPort)

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
