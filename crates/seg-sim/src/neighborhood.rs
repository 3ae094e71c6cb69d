//! The happiness predicate.
//!
//! Neighbors are ranked by Euclidean distance from a candidate location;
//! equal distances fall back to population order.  That ordering is a total
//! order, so selecting the `k` smallest with `select_nth_unstable_by` gives
//! exactly the first `k` entries of a stable sort, in O(n) instead of
//! O(n log n).

use std::cmp::Ordering;

use seg_agent::Snapshot;
use seg_core::{AgentId, Group, HappinessRule, Point, SegError, SegResult};

/// Transient ranking record.  Never leaves this module.
#[derive(Copy, Clone)]
struct Neighbor {
    distance: f64,
    index:    u32,
    group:    Group,
}

fn rank_order(a: &Neighbor, b: &Neighbor) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then(a.index.cmp(&b.index))
}

/// Reject a neighborhood larger than the set of other agents.
///
/// Ranking never truncates: every public evaluator calls this first.
pub fn check_neighborhood(snapshot: &Snapshot, k: usize) -> SegResult<()> {
    let others = snapshot.len().saturating_sub(1);
    if k > others {
        return Err(SegError::Config(format!(
            "neighbor_count {k} exceeds the {others} other agents in the snapshot"
        )));
    }
    Ok(())
}

fn check_agent(snapshot: &Snapshot, agent: AgentId) -> SegResult<()> {
    if agent.index() >= snapshot.len() {
        return Err(SegError::AgentOutOfRange { agent, population: snapshot.len() });
    }
    Ok(())
}

/// The `k` nearest agents to `candidate`, excluding `agent` itself, in no
/// particular order.  Callers have already run [`check_neighborhood`].
fn k_nearest(snapshot: &Snapshot, agent: AgentId, candidate: Point, k: usize) -> Vec<Neighbor> {
    let mut ranked: Vec<Neighbor> = snapshot
        .iter()
        .filter(|&(id, _, _)| id != agent)
        .map(|(id, pos, group)| Neighbor {
            distance: candidate.distance(pos),
            index:    id.0,
            group,
        })
        .collect();

    if k == 0 {
        ranked.clear();
        return ranked;
    }
    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, rank_order);
        ranked.truncate(k);
    }
    ranked
}

/// Predicate body shared by the detector and the relocation search, which
/// validate the rule and agent IDs once per phase.
pub(crate) fn happy_at(
    snapshot:  &Snapshot,
    agent:     AgentId,
    candidate: Point,
    group:     Group,
    rule:      HappinessRule,
) -> bool {
    if rule.same_type_threshold == 0 {
        return true;
    }
    let same = k_nearest(snapshot, agent, candidate, rule.neighbor_count)
        .iter()
        .filter(|n| n.group == group)
        .count();
    same >= rule.same_type_threshold
}

/// Would `agent`, of `group`, be happy at `candidate`?
///
/// The agent at `agent` is never its own neighbor, even when `candidate`
/// equals its current position.  Pure: depends only on the arguments.
///
/// Fails with [`SegError::Config`] when `rule.neighbor_count` exceeds the
/// number of other agents.
pub fn is_happy_at(
    snapshot:  &Snapshot,
    agent:     AgentId,
    candidate: Point,
    group:     Group,
    rule:      HappinessRule,
) -> SegResult<bool> {
    check_neighborhood(snapshot, rule.neighbor_count)?;
    Ok(happy_at(snapshot, agent, candidate, group, rule))
}

/// Is `agent` happy where it currently stands?
pub fn is_happy(snapshot: &Snapshot, agent: AgentId, rule: HappinessRule) -> SegResult<bool> {
    check_agent(snapshot, agent)?;
    is_happy_at(
        snapshot,
        agent,
        snapshot.position(agent),
        snapshot.group(agent),
        rule,
    )
}

/// The `k` nearest other agents to `candidate`, nearest first.
pub fn nearest_neighbors(
    snapshot:  &Snapshot,
    agent:     AgentId,
    candidate: Point,
    k:         usize,
) -> SegResult<Vec<AgentId>> {
    check_neighborhood(snapshot, k)?;
    let mut nearest = k_nearest(snapshot, agent, candidate, k);
    nearest.sort_unstable_by(rank_order);
    Ok(nearest.into_iter().map(|n| AgentId(n.index)).collect())
}
