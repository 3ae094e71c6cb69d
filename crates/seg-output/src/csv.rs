//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `iteration_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, IterationSummaryRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["iteration", "agent_id", "x", "y", "group"])?;

        let mut summaries = Writer::from_path(dir.join("iteration_summaries.csv"))?;
        summaries.write_record(["iteration", "unhappy_agents"])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.iteration.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.group as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.iteration.to_string(),
            row.unhappy.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
