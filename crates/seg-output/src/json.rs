//! JSON output backend.
//!
//! Creates two files in the configured output directory:
//! - `snapshots.json`: `[[[x, y, type], …], …]`, one inner array per
//!   snapshot, the same shape the host boundary returns.
//! - `iteration_summaries.json`: `[{"iteration": 0, "unhappy": 37}, …]`
//!
//! Both arrays are streamed: elements are written as they arrive and the
//! closing bracket is written by `finish`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{AgentSnapshotRow, IterationSummaryRow, OutputResult};
use crate::writer::OutputWriter;

/// A JSON array written one element at a time.
struct JsonArray {
    out:   BufWriter<File>,
    empty: bool,
}

impl JsonArray {
    fn create(path: &Path) -> OutputResult<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        out.write_all(b"[")?;
        Ok(Self { out, empty: true })
    }

    fn push<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> OutputResult<()> {
        if !self.empty {
            self.out.write_all(b",")?;
        }
        self.empty = false;
        serde_json::to_writer(&mut self.out, value)?;
        Ok(())
    }

    fn close(&mut self) -> OutputResult<()> {
        self.out.write_all(b"]\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes simulation output to two JSON files.
pub struct JsonWriter {
    snapshots: JsonArray,
    summaries: JsonArray,
    finished:  bool,
}

impl JsonWriter {
    /// Create the two JSON files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            snapshots: JsonArray::create(&dir.join("snapshots.json"))?,
            summaries: JsonArray::create(&dir.join("iteration_summaries.json"))?,
            finished:  false,
        })
    }
}

impl OutputWriter for JsonWriter {
    fn write_snapshot(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        let tuples: Vec<(f64, f64, bool)> = rows.iter().map(|r| (r.x, r.y, r.group)).collect();
        self.snapshots.push(&tuples)
    }

    fn write_iteration_summary(&mut self, row: &IterationSummaryRow) -> OutputResult<()> {
        self.summaries.push(&serde_json::json!({
            "iteration": row.iteration,
            "unhappy":   row.unhappy,
        }))
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.close()?;
        self.summaries.close()?;
        Ok(())
    }
}
