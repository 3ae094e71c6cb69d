//! Relocation phase: find each unhappy agent a happy location, then move.
//!
//! # Two steps
//!
//! 1. **Search** (read-only, parallel with the `parallel` feature): every
//!    unhappy agent samples uniform candidates from the unit square and tests
//!    them against the frozen snapshot.  Agents decide simultaneously and do
//!    not see each other's candidates.
//! 2. **Apply** (sequential): after every search has returned, the chosen
//!    locations are written into the snapshot in one pass.
//!
//! # Bounded search
//!
//! A search stops after `PlacementPolicy::max_attempts` candidates or once
//! `PlacementPolicy::timeout` has elapsed.  The first search to give up
//! raises a shared cancellation flag; every other in-flight search of the
//! same round sees it on its next attempt and stops.  A failed round writes
//! nothing.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use seg_agent::Snapshot;
use seg_core::{AgentId, AgentRng, HappinessRule, Iteration, PlacementPolicy, Point, SegError};

use crate::neighborhood::{check_neighborhood, happy_at};
use crate::{SimError, SimResult};

/// Why a single search returned without a location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchFailure {
    /// Every allowed candidate was rejected.
    Exhausted { attempts: u64 },
    /// The wall-clock limit passed first.
    TimedOut { attempts: u64, elapsed: Duration },
    /// Another search in the same round failed.
    Abandoned,
}

/// Searches for and applies new locations for unhappy agents.
#[derive(Copy, Clone, Debug)]
pub struct Relocator {
    rule:   HappinessRule,
    policy: PlacementPolicy,
}

impl Relocator {
    pub fn new(rule: HappinessRule, policy: PlacementPolicy) -> Self {
        Self { rule, policy }
    }

    #[inline]
    pub fn rule(&self) -> HappinessRule {
        self.rule
    }

    /// Search for a happy location for `agent`.
    ///
    /// Reads only `snapshot`; raises `cancel` when giving up and stops early
    /// when someone else raised it.  `agent` and the rule have been checked
    /// against `snapshot` by [`plan_moves`][Self::plan_moves].
    pub(crate) fn search(
        &self,
        snapshot: &Snapshot,
        agent:    AgentId,
        rng:      &mut AgentRng,
        cancel:   &AtomicBool,
    ) -> Result<Point, SearchFailure> {
        let group = snapshot.group(agent);
        let started = Instant::now();

        for attempt in 1..=self.policy.max_attempts {
            if cancel.load(Ordering::Relaxed) {
                return Err(SearchFailure::Abandoned);
            }

            let candidate = rng.unit_point();
            if happy_at(snapshot, agent, candidate, group, self.rule) {
                log::trace!("{agent} placed at {candidate} after {attempt} attempts");
                return Ok(candidate);
            }

            if let Some(limit) = self.policy.timeout {
                let elapsed = started.elapsed();
                if elapsed >= limit {
                    cancel.store(true, Ordering::Relaxed);
                    return Err(SearchFailure::TimedOut { attempts: attempt, elapsed });
                }
            }
        }

        cancel.store(true, Ordering::Relaxed);
        Err(SearchFailure::Exhausted { attempts: self.policy.max_attempts })
    }

    /// Search step for every agent in `unhappy`.
    ///
    /// Each search draws from an `AgentRng` seeded by `(round_seed, agent)`,
    /// so the result does not depend on thread scheduling.  Returns the
    /// chosen `(agent, location)` pairs in ascending `AgentId` order.
    ///
    /// Rejects an oversized neighborhood or an agent outside the snapshot
    /// before any search starts.
    pub fn plan_moves(
        &self,
        snapshot:   &Snapshot,
        unhappy:    &BTreeSet<AgentId>,
        iteration:  Iteration,
        round_seed: u64,
    ) -> SimResult<Vec<(AgentId, Point)>> {
        check_neighborhood(snapshot, self.rule.neighbor_count)?;
        if let Some(&agent) = unhappy.last().filter(|a| a.index() >= snapshot.len()) {
            return Err(SegError::AgentOutOfRange { agent, population: snapshot.len() }.into());
        }

        let agents: Vec<AgentId> = unhappy.iter().copied().collect();
        let cancel = AtomicBool::new(false);

        let search_one = |&agent: &AgentId| {
            let mut rng = AgentRng::new(round_seed, agent);
            (agent, self.search(snapshot, agent, &mut rng, &cancel))
        };

        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<(AgentId, Result<Point, SearchFailure>)> =
            agents.iter().map(search_one).collect();

        #[cfg(feature = "parallel")]
        let outcomes: Vec<(AgentId, Result<Point, SearchFailure>)> = {
            use rayon::prelude::*;
            agents.par_iter().map(search_one).collect()
        };

        // Report the lowest-numbered agent that genuinely failed; `Abandoned`
        // outcomes are a consequence of that failure, not a cause.
        let failure = outcomes.iter().find_map(|(agent, outcome)| match outcome {
            Err(SearchFailure::Exhausted { attempts }) => Some(SimError::PlacementFailed {
                agent:    *agent,
                iteration,
                attempts: *attempts,
            }),
            Err(SearchFailure::TimedOut { attempts, elapsed }) => Some(SimError::PlacementTimedOut {
                agent:    *agent,
                iteration,
                attempts: *attempts,
                elapsed:  *elapsed,
            }),
            _ => None,
        });
        if let Some(err) = failure {
            return Err(err);
        }

        Ok(outcomes
            .into_iter()
            .filter_map(|(agent, outcome)| outcome.ok().map(|point| (agent, point)))
            .collect())
    }

    /// Move every agent in `unhappy` to a happy location.
    ///
    /// Searches run against `snapshot` as it is on entry; the writes happen
    /// only after all of them have finished.  Returns the number of agents
    /// moved.  On error `snapshot` is unchanged.
    pub fn relocate(
        &self,
        snapshot:   &mut Snapshot,
        unhappy:    &BTreeSet<AgentId>,
        iteration:  Iteration,
        round_seed: u64,
    ) -> SimResult<usize> {
        let moves = self.plan_moves(snapshot, unhappy, iteration, round_seed)?;
        snapshot.apply_moves(&moves)?;
        log::debug!("{iteration}: moved {} agents", moves.len());
        Ok(moves.len())
    }
}
