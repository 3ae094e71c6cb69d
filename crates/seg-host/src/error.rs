use seg_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid no of arguments passed")]
    ArgumentCount { got: usize },

    #[error("argument {position} ({name}) must be a non-negative integer, got {value}")]
    InvalidArgument {
        position: usize,
        name:     &'static str,
        value:    serde_json::Value,
    },

    #[error("argument {position} ({name}) is too large: {value}")]
    ArgumentOverflow {
        position: usize,
        name:     &'static str,
        value:    u64,
    },

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("could not encode snapshots: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HostResult<T> = Result<T, HostError>;
