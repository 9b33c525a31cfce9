//! Browser platform backed by the host order page

use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::ports::outbound::PlatformPort;

#[derive(Clone, Default)]
pub struct WasmPlatform;

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

impl PlatformPort for WasmPlatform {
    fn sleep_ms(&self, ms: u64) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(ms).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).boxed_local()
    }

    fn reload_page(&self) -> bool {
        match web_sys::window().map(|window| window.location().reload()) {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                tracing::warn!(error = ?e, "Page reload failed");
                false
            }
            None => false,
        }
    }

    fn hidden_field(&self, name: &str) -> Option<String> {
        let selector = format!("input[name=\"{}\"]", name);
        document()?
            .query_selector(&selector)
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()
            .map(|input| input.value())
    }

    fn has_element(&self, id: &str) -> bool {
        document()
            .and_then(|document| document.get_element_by_id(id))
            .is_some()
    }
}

pub fn create_platform() -> WasmPlatform {
    WasmPlatform
}
