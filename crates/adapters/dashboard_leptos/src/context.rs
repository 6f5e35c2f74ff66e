//! Shared smart-home context.
//!
//! The root component owns a [`LightsStore`] and publishes a
//! [`SmartHomeContext`] through `<Provider>`. Views read the lights and
//! dispatch actions through the context, never through props.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use smarthome_app::store::LightsStore;
use smarthome_domain::action::Action;
use smarthome_domain::lights::LightsState;

/// Reactive light state plus the dispatcher that changes it.
#[derive(Clone)]
pub struct SmartHomeContext {
    lights: Signal<LightsState>,
    dispatch: Callback<Action>,
}

impl SmartHomeContext {
    /// Build the owning context around `store`.
    ///
    /// Every dispatched action goes through the store; the resulting state
    /// is mirrored into a signal whose writer only this context holds.
    #[must_use]
    pub fn new(store: LightsStore) -> Self {
        let (lights, set_lights) = signal(store.state());
        let store = StoredValue::new(store);

        let dispatch = Callback::new(move |action: Action| {
            let next = store.with_value(|store| store.dispatch(&action));
            if lights.with_untracked(|current| *current != next) {
                set_lights.set(next);
            }
        });

        Self {
            lights: lights.into(),
            dispatch,
        }
    }

    /// A read-only context publishing a fixed `lights` value.
    ///
    /// Dispatching through it does nothing.
    #[must_use]
    pub fn stored(lights: LightsState) -> Self {
        Self {
            lights: Signal::stored(lights),
            dispatch: Callback::new(|action: Action| {
                tracing::debug!(%action, "read-only smart home context, action dropped");
            }),
        }
    }

    /// The reactive light state.
    #[must_use]
    pub fn lights(&self) -> Signal<LightsState> {
        self.lights
    }

    /// Request a state change.
    pub fn dispatch(&self, action: Action) {
        self.dispatch.run(action);
    }
}

impl Default for SmartHomeContext {
    fn default() -> Self {
        Self::stored(LightsState::default())
    }
}

/// Access the nearest smart-home context.
///
/// Without a provider this is [`SmartHomeContext::default`]: three lights,
/// all off.
pub fn use_smart_home() -> SmartHomeContext {
    use_context::<SmartHomeContext>().unwrap_or_default()
}
