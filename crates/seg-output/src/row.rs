//! Plain data row types written by output backends.

/// One agent's state in one recorded snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub iteration: u64,
    pub agent_id:  u32,
    pub x:         f64,
    pub y:         f64,
    /// Group marshalled as `bool` (`A = false`, `B = true`).
    pub group:     bool,
}

/// Result of one detection phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationSummaryRow {
    pub iteration: u64,
    pub unhappy:   u64,
}
