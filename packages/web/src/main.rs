use dioxus::prelude::*;

use api::{EventsClient, HttpApi};
use store::PlannerConfig;
use ui::views::PartyPlannerView;
use ui::PlannerProvider;

/// Deployment settings, baked in at build time.
const CONFIG_TOML: &str = include_str!("../party-planner.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> PlannerConfig {
    let config = match PlannerConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {e}", PlannerConfig::filename());
            PlannerConfig::default()
        }
    };
    tracing::info!("Events API at {}", config.api.endpoint());
    config
}

#[component]
fn App() -> Element {
    let api = use_hook(|| EventsClient::from(HttpApi::new(&load_config().api)));

    rsx! {
        PlannerProvider {
            api,
            PartyPlannerView {}
        }
    }
}
