//! `seg-output` — simulation output writers for the Schelling engine.
//!
//! | Backend     | Files created                                           |
//! |-------------|---------------------------------------------------------|
//! | CSV         | `agent_snapshots.csv`, `iteration_summaries.csv`        |
//! | JSON        | `snapshots.json`, `iteration_summaries.json`            |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `seg_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     log::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, IterationSummaryRow};
pub use writer::OutputWriter;
