//! `Snapshot` — the full population state at one iteration.
//!
//! # Layout
//!
//! Structure of Arrays: `positions[i]` and `groups[i]` both describe the
//! agent with `AgentId(i)`.  The two vectors always have equal length and
//! that length never changes.
//!
//! # Mutation
//!
//! Groups are fixed at construction.  The only mutator is
//! [`Snapshot::apply_moves`], which rewrites positions.  The simulation
//! driver records a snapshot by value and mutates only a private clone, so
//! recorded snapshots never change.

use seg_core::{AgentId, Group, Point, SegError, SegResult};

/// Positions and groups for every agent, indexed by `AgentId`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Snapshot {
    positions: Vec<Point>,
    groups:    Vec<Group>,
}

impl Snapshot {
    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Point {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn group(&self, agent: AgentId) -> Group {
        self.groups[agent.index()]
    }

    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Iterate `(AgentId, position, group)` in population order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Point, Group)> + '_ {
        self.positions
            .iter()
            .zip(&self.groups)
            .enumerate()
            .map(|(i, (&p, &g))| (AgentId(i as u32), p, g))
    }

    /// Iterate the host wire form: one `(x, y, type)` tuple per agent.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, bool)> + '_ {
        self.positions
            .iter()
            .zip(&self.groups)
            .map(|(p, g)| (p.x, p.y, g.as_bool()))
    }

    /// Count agents in `group`.
    pub fn count_group(&self, group: Group) -> usize {
        self.groups.iter().filter(|&&g| g == group).count()
    }

    /// Move each listed agent to its new position.
    ///
    /// All IDs are checked before any write, so on error the snapshot is
    /// unchanged.
    pub fn apply_moves(&mut self, moves: &[(AgentId, Point)]) -> SegResult<()> {
        let population = self.len();
        if let Some(&(agent, _)) = moves.iter().find(|(a, _)| a.index() >= population) {
            return Err(SegError::AgentOutOfRange { agent, population });
        }
        for &(agent, point) in moves {
            debug_assert!(point.in_unit_square(), "{agent} moved outside the unit square: {point}");
            self.positions[agent.index()] = point;
        }
        Ok(())
    }
}

impl FromIterator<(Point, Group)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Point, Group)>>(iter: I) -> Self {
        let (positions, groups) = iter.into_iter().unzip();
        Self { positions, groups }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Snapshot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Snapshot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = <Vec<(f64, f64, bool)>>::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|(x, y, t)| (Point::new(x, y), Group::from(t)))
            .collect())
    }
}
