//! PlatformPort - host environment services
//!
//! On the web the host is the order page: hidden inputs carry the page
//! context and a reload shows the updated order. On desktop the same
//! values come from the environment and there is no page to reload.

use futures_util::future::LocalBoxFuture;

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> LocalBoxFuture<'static, ()>;

    /// Reload the host page. Returns `false` when the platform has no page.
    fn reload_page(&self) -> bool;

    /// Value of a named hidden input of the host page
    fn hidden_field(&self, name: &str) -> Option<String>;

    /// Whether an element with this id exists in the host page
    fn has_element(&self, id: &str) -> bool;
}
