//! The reducer — the pure transition function of the light state.

use crate::action::Action;
use crate::lights::LightsState;

/// Compute the state that follows `state` once `action` is applied.
///
/// Never mutates `state`. Unknown actions and toggles of a light that
/// does not exist leave the state unchanged.
#[must_use]
pub fn reduce(state: &LightsState, action: &Action) -> LightsState {
    match action {
        Action::AllOn => state.with_all(true),
        Action::AllOff => state.with_all(false),
        Action::Toggle(index) => state.toggled(*index).unwrap_or_else(|_| state.clone()),
        Action::Unknown => state.clone(),
    }
}
