//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use seg_agent::Snapshot;
use seg_core::Iteration;
use seg_sim::SimObserver;

use crate::row::{AgentSnapshotRow, IterationSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every recorded snapshot and every
/// iteration summary to any [`OutputWriter`] backend (CSV, JSON).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Flush the writer.  Needed when `run` returned an error and
    /// `on_sim_end` never fired.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_unhappy(&mut self, iteration: Iteration, unhappy: usize) {
        let row = IterationSummaryRow {
            iteration: iteration.0,
            unhappy:   unhappy as u64,
        };
        let result = self.writer.write_iteration_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, iteration: Iteration, snapshot: &Snapshot) {
        let rows: Vec<AgentSnapshotRow> = snapshot
            .iter()
            .map(|(agent, pos, group)| AgentSnapshotRow {
                iteration: iteration.0,
                agent_id:  agent.0,
                x:         pos.x,
                y:         pos.y,
                group:     group.as_bool(),
            })
            .collect();

        let result = self.writer.write_snapshot(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _last: Iteration) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
