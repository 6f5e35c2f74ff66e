//! In-process light store.
//!
//! The store is the only writer of the light state. Adapters publish the
//! snapshots it returns to their own views.

use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthome_domain::action::Action;
use smarthome_domain::lights::LightsState;
use smarthome_domain::reducer::reduce;

/// Owner of the live light state.
///
/// Deliberately not `Clone`: there is exactly one writer per session.
pub struct LightsStore {
    state: Mutex<LightsState>,
}

impl LightsStore {
    /// Create a store seeded with `initial`.
    #[must_use]
    pub fn new(initial: LightsState) -> Self {
        Self {
            state: Mutex::new(initial),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LightsState {
        self.lock_state().clone()
    }

    /// Apply `action` and return the resulting state.
    pub fn dispatch(&self, action: &Action) -> LightsState {
        let mut state = self.lock_state();

        if let Action::Toggle(index) = *action
            && index >= state.len()
        {
            tracing::warn!(index, len = state.len(), "ignoring toggle of unknown light");
        }

        let next = reduce(&state, action);
        tracing::debug!(%action, changed = next != *state, "dispatched action");
        *state = next.clone();
        next
    }

    fn lock_state(&self) -> MutexGuard<'_, LightsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LightsStore {
    fn default() -> Self {
        Self::new(LightsState::default())
    }
}
