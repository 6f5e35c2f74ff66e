//! Bulk light controls.

use leptos::prelude::*;
use smarthome_domain::action::Action;

use crate::context::use_smart_home;

/// Button labels and the action each one dispatches, in display order.
const BULK_CONTROLS: [(&str, Action); 2] = [("All Off", Action::AllOff), ("All On", Action::AllOn)];

/// "All Off" and "All On" buttons.
#[component]
pub fn Controls() -> impl IntoView {
    let home = use_smart_home();

    view! {
        <div>
            {BULK_CONTROLS
                .into_iter()
                .map(|(label, action)| {
                    let home = home.clone();
                    view! { <button on:click=move |_| home.dispatch(action)>{label}</button> }
                })
                .collect_view()}
        </div>
    }
}
