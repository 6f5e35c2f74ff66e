//! Domain error types.

/// Errors raised when an operation violates a [`LightsState`](crate::lights::LightsState) invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LightsError {
    /// The requested light does not exist.
    #[error("light index {index} is out of range (the house has {len} lights)")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of lights in the state.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mention_index_and_length_in_message() {
        let err = LightsError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "light index 5 is out of range (the house has 3 lights)"
        );
    }
}
