//! Desktop platform
//!
//! Page context is read from `TRACKER_*` environment variables (a `.env`
//! file is loaded by the binary). There is no host page, so reloading is
//! not available and every element lookup succeeds.

use std::time::Duration;

use futures_util::future::{FutureExt, LocalBoxFuture};

use tracker_shared::page_fields;

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct DesktopPlatform;

/// Environment variable that stands in for a hidden page input.
pub fn env_key(field: &str) -> String {
    match field {
        page_fields::CSRF_TOKEN => "TRACKER_CSRF_TOKEN".to_string(),
        other => format!("TRACKER_{}", other.to_ascii_uppercase()),
    }
}

impl PlatformPort for DesktopPlatform {
    fn sleep_ms(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(Duration::from_millis(ms)).boxed_local()
    }

    fn reload_page(&self) -> bool {
        false
    }

    fn hidden_field(&self, name: &str) -> Option<String> {
        std::env::var(env_key(name)).ok()
    }

    fn has_element(&self, _id: &str) -> bool {
        true
    }
}

pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_follow_field_names() {
        assert_eq!(env_key(page_fields::ORDER_ID), "TRACKER_ORDER_ID");
        assert_eq!(env_key(page_fields::ORDER_TYPE), "TRACKER_ORDER_TYPE");
        assert_eq!(env_key(page_fields::CSRF_TOKEN), "TRACKER_CSRF_TOKEN");
        assert_eq!(
            env_key(page_fields::EXTRACTION_HEADER),
            "TRACKER_EXTRACTION_HEADER"
        );
    }

    #[tokio::test]
    async fn desktop_cannot_reload() {
        let platform = create_platform();
        platform.sleep_ms(0).await;
        assert!(!platform.reload_page());
    }
}
