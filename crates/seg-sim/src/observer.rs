//! Simulation observer trait for progress reporting and data collection.

use seg_agent::Snapshot;
use seg_core::Iteration;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// iteration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_unhappy(&mut self, iteration: Iteration, unhappy: usize) {
///         println!("{iteration}: {unhappy} unhappy agents");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each relocation round.  `iteration` is the
    /// snapshot the round will produce.
    fn on_iteration_start(&mut self, _iteration: Iteration) {}

    /// Called after the detection phase with the number of unhappy agents
    /// in the snapshot at `iteration`.
    fn on_unhappy(&mut self, _iteration: Iteration, _unhappy: usize) {}

    /// Called for every recorded snapshot, including the initial one at
    /// iteration 0.
    fn on_snapshot(&mut self, _iteration: Iteration, _snapshot: &Snapshot) {}

    /// Called when the snapshot at `iteration` has no unhappy agents.
    fn on_converged(&mut self, _iteration: Iteration) {}

    /// Called once after the loop ends without error.  `last` is the
    /// iteration of the final recorded snapshot.
    fn on_sim_end(&mut self, _last: Iteration) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
