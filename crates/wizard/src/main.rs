//! Tracker extraction wizard - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracker_wizard::application::{EffectExecutor, PageContext, WizardConfig};
use tracker_wizard::infrastructure::http_client::ApiAdapter;
use tracker_wizard::infrastructure::platform::create_platform;
use tracker_wizard::ports::outbound::{PlatformPort, RawApiPort};
use tracker_wizard::presentation::WizardServices;
use tracker_wizard::MODAL_ROOT_ID;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    let dotenv = dotenvy::dotenv();

    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker_wizard=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = dotenv {
            tracing::debug!(error = %e, "No .env file loaded");
        }
    }

    tracing::info!("Starting tracker extraction wizard");

    if let Err(e) = run() {
        tracing::error!(error = %e, "Extraction wizard not initialized");
    }
}

fn run() -> anyhow::Result<()> {
    // Platform
    let platform = create_platform();
    if !platform.has_element(MODAL_ROOT_ID) {
        anyhow::bail!("modal root #{} not found", MODAL_ROOT_ID);
    }

    // Page context
    let config = WizardConfig::from_env();
    let Some(page) = PageContext::load(&platform, &config) else {
        return Ok(());
    };
    tracing::info!(order_id = %page.wizard.order_id, "Extraction wizard ready");

    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config.base_url));
    let executor = EffectExecutor::new(api, platform);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(target_arch = "wasm32")]
    {
        builder = builder.with_cfg(dioxus::web::Config::new().rootname(MODAL_ROOT_ID));
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Order Extraction Review");
        builder = builder.with_cfg(dioxus_desktop::Config::new().with_window(window));
    }

    builder
        .with_context(WizardServices::new(executor, page, config))
        .launch(tracker_wizard::app);

    Ok(())
}
