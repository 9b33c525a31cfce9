//! Client configuration
//!
//! The web build talks to its own origin and needs no settings. The desktop
//! build reads `TRACKER_BASE_URL` and `TRACKER_RELOAD_DELAY_MS`.

use tracker_domain::wizard::RELOAD_DELAY_MS;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BASE_URL_VAR: &str = "TRACKER_BASE_URL";
pub const RELOAD_DELAY_VAR: &str = "TRACKER_RELOAD_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Prefix for API paths. Empty means same-origin relative requests.
    pub base_url: String,
    /// Wait between the success banner and the reload
    pub reload_delay_ms: u64,
    /// Show the modal as soon as the app starts
    pub open_on_start: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        let (base_url, open_on_start) = (String::new(), false);
        #[cfg(not(target_arch = "wasm32"))]
        let (base_url, open_on_start) = (DEFAULT_BASE_URL.to_string(), true);

        Self {
            base_url,
            reload_delay_ms: RELOAD_DELAY_MS,
            open_on_start,
        }
    }
}

impl WizardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. Invalid values are logged and replaced
    /// by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BASE_URL_VAR) {
            match Url::parse(raw.trim()) {
                Ok(url) => config.base_url = url.as_str().trim_end_matches('/').to_string(),
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", BASE_URL_VAR),
            }
        }

        if let Some(raw) = lookup(RELOAD_DELAY_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(delay) => config.reload_delay_ms = delay,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid {}", RELOAD_DELAY_VAR)
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = WizardConfig::from_lookup(lookup(&[]));
        assert_eq!(config, WizardConfig::default());
        assert_eq!(config.reload_delay_ms, 1500);
    }

    #[test]
    fn reads_base_url_and_delay() {
        let config = WizardConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://tracker.example.com/"),
            (RELOAD_DELAY_VAR, "250"),
        ]));
        assert_eq!(config.base_url, "https://tracker.example.com");
        assert_eq!(config.reload_delay_ms, 250);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = WizardConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "not a url"),
            (RELOAD_DELAY_VAR, "soon"),
        ]));
        assert_eq!(config.base_url, WizardConfig::default().base_url);
        assert_eq!(config.reload_delay_ms, 1500);
    }
}
