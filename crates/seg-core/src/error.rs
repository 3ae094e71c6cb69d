//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `SegError` as one
//! variant via `From`.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `seg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SegError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{agent} out of range for a population of {population}")]
    AgentOutOfRange { agent: AgentId, population: usize },

    #[error("{what} length {got} does not match population size {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for all `seg-*` crates.
pub type SegResult<T> = Result<T, SegError>;
