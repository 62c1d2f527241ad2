//! Error types for board construction, search and configuration.

use thiserror::Error;

/// Reasons a board cannot be constructed from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The input matched neither the decimal nor the hex layout.
    #[error("unrecognized board layout: {0:?}")]
    Layout(String),

    /// A decimal token was not a number in 0..16.
    #[error("invalid tile {0:?}, expected a number between 0 and 15")]
    Tile(String),

    /// Some tile is missing, so another one must be duplicated.
    #[error("not a permutation of 0..16, missing tiles {missing:?}")]
    NotPermutation { missing: Vec<u8> },
}

/// Terminal outcomes of a search that did not reach any goal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("frontier exhausted after {steps} steps without reaching the goal")]
    Exhausted { steps: u64 },
}

/// Errors raised while loading the demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {field} board: {source}")]
    Board {
        field: &'static str,
        #[source]
        source: BoardError,
    },
}
