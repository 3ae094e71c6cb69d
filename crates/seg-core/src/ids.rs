//! Strongly typed identifier and counter wrappers.
//!
//! `AgentId` is the stable index of an agent within a population; it never
//! changes across a run.  The inner integer is `pub` to allow direct
//! indexing into SoA `Vec`s, but callers should prefer `.index()`.

use std::fmt;

/// Index of an agent in SoA storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// A simulation iteration counter.
///
/// Iteration 0 is the initial population; iteration `n` is the snapshot
/// produced by the `n`-th relocation round.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u64);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iteration {}", self.0)
    }
}
