use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod components;
mod connectivity_listener;
mod dashboards;
mod notify;
mod shell;
use components::{CredentialsPrompt, LoginForm, TopBar};
use connectivity_listener::ConnectivityListener;
use dashboards::Dashboards;
use shell::ShellState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Feature flags, embedded at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    session::config::load_app_config(CONFIG_TOML);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let flags: FeatureFlags = session::config::app_config().features.clone();
    use_context_provider(|| flags);

    // Restores any saved session before the first render
    use_context_provider(ShellState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ConnectivityListener {}
        TopBar {}
        main { class: "app-main",
            LoginForm {}
            Dashboards {}
        }
        CredentialsPrompt {}
    }
}
