//! Campaign Dashboard - Dioxus Application
//!
//! Single page campaign analytics: loads campaigns from an HTTP endpoint,
//! filters them by status and shows totals next to the campaign table.
//!
//! Runs as a web app by default, or as a desktop app with `--features desktop`.

mod api;
mod components;
mod config;
mod models;
mod state;

use dioxus::prelude::*;
use api::{ApiClient, CampaignSourceHandle};
use components::dashboard::CampaignDashboard;
use config::DashboardConfig;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campaign_dashboard=info")))
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();
    }

    let config = DashboardConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid configuration, using defaults: {:#}", e);
        DashboardConfig::default()
    });

    tracing::info!("Loading campaigns from {}", config.campaigns_url);
    config::init(config);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| CampaignSourceHandle::new(ApiClient::new(config::current())));

    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        CampaignDashboard {}
    }
}
