//! Run configuration and its validation.
//!
//! Loaded from CLI flags or the host boundary by the application layer and
//! validated with [`SimConfig::validate`] before any simulation work starts.

use std::time::Duration;

use crate::{SegError, SegResult};

// ── HappinessRule ─────────────────────────────────────────────────────────────

/// Parameters of the happiness predicate.
///
/// An agent is happy when at least `same_type_threshold` of its
/// `neighbor_count` nearest other agents share its group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HappinessRule {
    pub neighbor_count:      usize,
    pub same_type_threshold: usize,
}

impl HappinessRule {
    pub fn new(neighbor_count: usize, same_type_threshold: usize) -> Self {
        Self { neighbor_count, same_type_threshold }
    }

    /// `false` when no neighborhood can ever satisfy the rule.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.same_type_threshold <= self.neighbor_count
    }
}

// ── PlacementPolicy ───────────────────────────────────────────────────────────

/// Bounds on a single agent's relocation search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementPolicy {
    /// Candidate locations drawn before the search gives up.  Must be > 0.
    pub max_attempts: u64,

    /// Optional wall-clock cap per search.
    pub timeout: Option<Duration>,
}

impl PlacementPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            timeout:      None,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Population size.  Constant for the whole run.
    pub agent_count: usize,

    /// Size of the neighborhood considered by the happiness predicate.
    pub neighbor_count: usize,

    /// Minimum number of same-group neighbors for an agent to be happy.
    pub same_type_threshold: usize,

    /// Maximum number of relocation rounds.
    pub iterations: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses the global pool.
    pub num_threads: Option<usize>,

    /// Per-search attempt and time bounds.
    pub placement: PlacementPolicy,
}

impl SimConfig {
    /// Config with the given model parameters and default runtime settings.
    pub fn new(
        agent_count:         usize,
        neighbor_count:      usize,
        same_type_threshold: usize,
        iterations:          u64,
    ) -> Self {
        Self {
            agent_count,
            neighbor_count,
            same_type_threshold,
            iterations,
            seed:        0,
            num_threads: None,
            placement:   PlacementPolicy::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn rule(&self) -> HappinessRule {
        HappinessRule::new(self.neighbor_count, self.same_type_threshold)
    }

    /// Reject configurations the engine cannot run.
    ///
    /// The neighborhood must be strictly smaller than the set of other
    /// agents: `neighbor_count < agent_count - 1`.
    pub fn validate(&self) -> SegResult<()> {
        if self.agent_count < 2 {
            return Err(SegError::Config(format!(
                "agent_count must be at least 2, but is {}",
                self.agent_count
            )));
        }
        if self.neighbor_count >= self.agent_count - 1 {
            return Err(SegError::Config(format!(
                "neighbor_count must be less than agent_count - 1 ({}), but is {}",
                self.agent_count - 1,
                self.neighbor_count
            )));
        }
        if u32::try_from(self.agent_count).is_err() {
            return Err(SegError::Config(format!(
                "agent_count must fit in u32, but is {}",
                self.agent_count
            )));
        }
        if self.placement.max_attempts == 0 {
            return Err(SegError::Config("placement.max_attempts must be positive".into()));
        }
        if self.num_threads == Some(0) {
            return Err(SegError::Config("num_threads must be positive when set".into()));
        }
        Ok(())
    }
}
