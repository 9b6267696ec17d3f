//! Error types for knapsack-metaheur.

use thiserror::Error;

/// Error returned by catalog construction, knapsack setup and strategy runs.
///
/// Configuration errors are raised before any search loop starts; a run
/// that begins always completes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// Malformed input: mismatched list lengths, invalid budget,
    /// negative capacity, empty catalog, bad bounds.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A population engine broke its contract, e.g. by returning a
    /// chromosome of the wrong length or one that overflows the capacity.
    #[error("engine contract violated: {0}")]
    EngineContract(String),
}

impl KnapsackError {
    /// Shorthand for a [`KnapsackError::Configuration`] error.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        KnapsackError::Configuration(msg.into())
    }
}

/// Result type alias for knapsack-metaheur operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = KnapsackError::config("capacity must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "configuration error: capacity must be non-negative, got -1"
        );
    }
}
