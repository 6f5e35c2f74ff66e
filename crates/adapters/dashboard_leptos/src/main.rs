//! # smarthome-dashboard
//!
//! Entry point: installs the panic hook, loads the embedded configuration,
//! installs logging and mounts [`App`] to `<body>`.

use leptos::prelude::*;
use smarthome_dashboard_leptos::App;
use smarthome_dashboard_leptos::config::DashboardConfig;
use smarthome_dashboard_leptos::logging;

fn main() {
    logging::install_panic_hook();

    let config = match DashboardConfig::embedded() {
        Ok(config) => {
            logging::init(&config.logging.filter);
            config
        }
        Err(err) => {
            let config = DashboardConfig::default();
            logging::init(&config.logging.filter);
            tracing::warn!(error = %err, "invalid embedded configuration, using defaults");
            config
        }
    };

    let initial = config.initial_state();
    tracing::info!(lights = initial.len(), "mounting dashboard");

    leptos::mount::mount_to_body(move || view! { <App initial/> });
}
