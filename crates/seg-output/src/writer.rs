//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, IterationSummaryRow, OutputResult};

/// Trait implemented by the CSV and JSON writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error`.
pub trait OutputWriter {
    /// Write every agent of one snapshot.  `rows` are in `AgentId` order.
    fn write_snapshot(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one iteration summary row.
    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
