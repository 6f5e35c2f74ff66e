//! Light state — the on/off flags of every light in the house.

use serde::{Deserialize, Serialize};

use crate::error::LightsError;

/// Number of lights in a house when nothing else is configured.
pub const DEFAULT_LIGHT_COUNT: usize = 3;

/// Fixed-length row of on/off flags, one per light.
///
/// Index `i` always refers to the same light for the lifetime of the
/// state: no operation adds or removes lights. New states are derived
/// with [`with_all`](Self::with_all) and [`toggled`](Self::toggled), which
/// never touch `self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightsState {
    lights: Vec<bool>,
}

impl LightsState {
    /// Wrap an explicit list of flags.
    #[must_use]
    pub fn new(lights: Vec<bool>) -> Self {
        Self { lights }
    }

    /// A house of `count` lights, all switched off.
    #[must_use]
    pub fn all_off(count: usize) -> Self {
        Self::new(vec![false; count])
    }

    /// Number of lights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the house has no lights at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Flag of the light at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.lights.get(index).copied()
    }

    /// Whether the light at `index` is on. Unknown lights read as off.
    #[must_use]
    pub fn is_on(&self, index: usize) -> bool {
        self.get(index).unwrap_or(false)
    }

    /// Iterate over the flags in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.lights.iter().copied()
    }

    /// Borrow the flags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.lights
    }

    /// A state of the same length with every light set to `on`.
    #[must_use]
    pub fn with_all(&self, on: bool) -> Self {
        Self::new(vec![on; self.len()])
    }

    /// A state identical to this one except the light at `index` is inverted.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::IndexOutOfRange`] if `index` is not a light.
    pub fn toggled(&self, index: usize) -> Result<Self, LightsError> {
        let current = self.get(index).ok_or(LightsError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        let mut lights = self.lights.clone();
        lights[index] = !current;
        Ok(Self { lights })
    }
}

impl Default for LightsState {
    fn default() -> Self {
        Self::all_off(DEFAULT_LIGHT_COUNT)
    }
}

impl From<Vec<bool>> for LightsState {
    fn from(lights: Vec<bool>) -> Self {
        Self::new(lights)
    }
}
