//! # smarthome-dashboard-leptos
//!
//! Browser dashboard: a grid of light toggles plus "All On" / "All Off"
//! controls.
//!
//! The [`App`] root owns the [`LightsStore`] and wraps the whole view tree in
//! a `<Provider>` carrying a [`SmartHomeContext`]. Components below it read
//! the lights and dispatch actions through [`use_smart_home`].

use leptos::context::Provider;
use leptos::prelude::*;
use smarthome_app::store::LightsStore;
use smarthome_domain::lights::LightsState;

pub mod components;
pub mod config;
pub mod context;
pub mod logging;

pub use components::{Controls, Light, SmartHome};
pub use context::{SmartHomeContext, use_smart_home};

/// Root application component.
#[component]
pub fn App(
    /// Starting light state, usually [`DashboardConfig::initial_state`](config::DashboardConfig::initial_state).
    initial: LightsState,
) -> impl IntoView {
    let home = SmartHomeContext::new(LightsStore::new(initial));

    view! {
        <Provider value=home>
            <Dashboard/>
        </Provider>
    }
}

/// Controls followed by the light grid. Expects a [`SmartHomeContext`]
/// ancestor.
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div>
            <Controls/>
            <SmartHome/>
        </div>
    }
}
