//! Detection phase: which agents want to move?

use std::collections::BTreeSet;

use seg_agent::Snapshot;
use seg_core::{AgentId, HappinessRule};

use crate::SimResult;
use crate::neighborhood::{check_neighborhood, happy_at};

/// Every agent for which the happiness predicate is false.
///
/// Each agent is evaluated independently against the same read-only
/// snapshot.  With the `parallel` feature the evaluations fan out over
/// Rayon; the `collect` is the join barrier.  The rule is checked against
/// the snapshot once, before any evaluation.
pub fn find_unhappy(snapshot: &Snapshot, rule: HappinessRule) -> SimResult<BTreeSet<AgentId>> {
    check_neighborhood(snapshot, rule.neighbor_count)?;
    let count = snapshot.len() as u32;
    let unhappy =
        |&agent: &AgentId| !happy_at(snapshot, agent, snapshot.position(agent), snapshot.group(agent), rule);

    #[cfg(not(feature = "parallel"))]
    {
        Ok((0..count).map(AgentId).filter(unhappy).collect())
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        Ok((0..count).into_par_iter().map(AgentId).filter(unhappy).collect())
    }
}
