use std::time::Duration;

use seg_core::{AgentId, Iteration, SegError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] SegError),

    #[error("could not place {agent} during {iteration}: no happy location in {attempts} attempts")]
    PlacementFailed {
        agent:     AgentId,
        iteration: Iteration,
        attempts:  u64,
    },

    #[error("could not place {agent} during {iteration}: search timed out after {elapsed:?} ({attempts} attempts)")]
    PlacementTimedOut {
        agent:     AgentId,
        iteration: Iteration,
        attempts:  u64,
        elapsed:   Duration,
    },

    #[cfg(feature = "parallel")]
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl SimError {
    /// `true` for configuration errors caught before any simulation work.
    pub fn is_config(&self) -> bool {
        matches!(self, SimError::Core(SegError::Config(_)))
    }

    /// `true` when a relocation search gave up.
    pub fn is_placement_failure(&self) -> bool {
        matches!(
            self,
            SimError::PlacementFailed { .. } | SimError::PlacementTimedOut { .. }
        )
    }
}

pub type SimResult<T> = Result<T, SimError>;
