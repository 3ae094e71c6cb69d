//! The `Sim` struct and its iteration loop.

use seg_agent::Snapshot;
use seg_core::{Iteration, SimConfig, SimRng};

use crate::detector::find_unhappy;
use crate::{Relocator, SimObserver, SimResult};

// ── Output ────────────────────────────────────────────────────────────────────

/// Unhappy count observed in one recorded snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IterationSummary {
    pub iteration: Iteration,
    pub unhappy:   usize,
}

/// Everything a run produced.
#[derive(Clone, Debug)]
pub struct SimOutput {
    /// Snapshot 0 is the initial population; snapshot `i` is the result of
    /// the `i`-th relocation round.
    pub snapshots: Vec<Snapshot>,

    /// One entry per detection phase that ran.
    pub summaries: Vec<IterationSummary>,

    /// `true` if the last snapshot has no unhappy agents.
    pub converged: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Each round:
///
/// 1. **Copy**: clone the last recorded snapshot into a private working copy.
/// 2. **Detect** (parallel with the `parallel` feature): collect the set of
///    unhappy agents.  An empty set means convergence and ends the run.
/// 3. **Relocate** (parallel search, sequential apply): move every unhappy
///    agent to a location where it would be happy.
/// 4. **Record**: append the working copy to the output.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    pub(crate) rng:       SimRng,
    pub(crate) initial:   Snapshot,
    pub(crate) relocator: Relocator,

    /// Dedicated worker pool when `config.num_threads` is set.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl Sim {
    /// The iteration-0 population.
    pub fn initial(&self) -> &Snapshot {
        &self.initial
    }

    /// Run up to `config.iterations` rounds, stopping early on convergence.
    ///
    /// Calls observer hooks at every round.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<SimOutput> {
        let rule = self.relocator.rule();
        let mut snapshots = Vec::with_capacity((self.config.iterations as usize).saturating_add(1).min(1_024));
        let mut summaries = Vec::new();
        let mut converged = false;

        observer.on_snapshot(Iteration::ZERO, &self.initial);
        snapshots.push(self.initial.clone());

        for round in 1..=self.config.iterations {
            let evaluated = Iteration(round - 1);
            let produced = Iteration(round);
            observer.on_iteration_start(produced);

            let Some(current) = snapshots.last() else { break };
            let mut next = current.clone();

            let unhappy = self.in_pool(|| find_unhappy(&next, rule))?;
            log::info!("{evaluated}: {} unhappy agents", unhappy.len());
            observer.on_unhappy(evaluated, unhappy.len());
            summaries.push(IterationSummary { iteration: evaluated, unhappy: unhappy.len() });

            if unhappy.is_empty() {
                converged = true;
                observer.on_converged(evaluated);
                break;
            }

            let round_seed = self.rng.round_seed();
            let relocator = &self.relocator;
            self.in_pool(|| relocator.relocate(&mut next, &unhappy, produced, round_seed))?;

            observer.on_snapshot(produced, &next);
            snapshots.push(next);
        }

        let last = Iteration(snapshots.len() as u64 - 1);
        if converged {
            log::info!("converged at {last}");
        } else {
            log::info!("iteration budget exhausted at {last}");
        }
        observer.on_sim_end(last);

        Ok(SimOutput { snapshots, summaries, converged })
    }

    /// Run `f` on the dedicated pool if one was configured.
    fn in_pool<T, F>(&self, f: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.install(f);
        }
        f()
    }
}
