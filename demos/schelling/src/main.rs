//! schelling — command-line runner for the segregation engine.
//!
//! Runs one simulation, optionally streams every snapshot to CSV or JSON,
//! and prints how segregated the final population is compared with the
//! initial one.
//!
//! ```text
//! schelling --agents 1000 --neighbors 10 --threshold 5 --iterations 20 \
//!           --seed 42 --output-dir output/run1 --format csv
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use seg_agent::Snapshot;
use seg_core::{Group, Iteration, PlacementPolicy, SegResult, SimConfig};
use seg_output::{CsvWriter, JsonWriter, OutputWriter, SimOutputObserver};
use seg_sim::{NoopObserver, Sim, SimBuilder, SimObserver, SimOutput, nearest_neighbors};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Population size.
    #[arg(long, default_value_t = 1_000)]
    agents: usize,

    /// Neighborhood size used by the happiness rule.
    #[arg(long, default_value_t = 10)]
    neighbors: usize,

    /// Same-group neighbors an agent needs to be happy.
    #[arg(long, default_value_t = 5)]
    threshold: usize,

    /// Maximum number of relocation rounds.
    #[arg(long, default_value_t = 20)]
    iterations: u64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Worker threads; all logical cores when omitted.
    #[arg(long)]
    threads: Option<usize>,

    /// Candidate locations tried per relocating agent.
    #[arg(long, default_value_t = PlacementPolicy::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,

    /// Wall-clock limit per relocation search, in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write snapshots and summaries here.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Output file format (default csv).
    #[arg(long, value_enum, requires = "output_dir")]
    format: Option<Format>,
}

impl Cli {
    fn config(&self) -> SimConfig {
        let mut config = SimConfig::new(self.agents, self.neighbors, self.threshold, self.iterations)
            .with_seed(self.seed);
        config.num_threads = self.threads;
        config.placement = PlacementPolicy {
            max_attempts: self.max_attempts,
            timeout:      self.timeout_ms.map(Duration::from_millis),
        };
        config
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

/// Wraps another observer and counts the rows it is handed.
struct CountingObserver<O: SimObserver> {
    inner:         O,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<O: SimObserver> CountingObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_iteration_start(&mut self, iteration: Iteration) {
        self.inner.on_iteration_start(iteration);
    }

    fn on_unhappy(&mut self, iteration: Iteration, unhappy: usize) {
        self.summary_rows += 1;
        self.inner.on_unhappy(iteration, unhappy);
    }

    fn on_snapshot(&mut self, iteration: Iteration, snapshot: &Snapshot) {
        self.snapshot_rows += snapshot.len();
        self.inner.on_snapshot(iteration, snapshot);
    }

    fn on_converged(&mut self, iteration: Iteration) {
        log::info!("no unhappy agents left at {iteration}");
        self.inner.on_converged(iteration);
    }

    fn on_sim_end(&mut self, last: Iteration) {
        self.inner.on_sim_end(last);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::debug!("{args:#?}");

    let config = args.config();
    let sim = SimBuilder::new(config.clone())
        .build()
        .context("invalid simulation parameters")?;

    let t0 = Instant::now();
    let (output, rows) = match &args.output_dir {
        None => run_with(sim, NoopObserver)?,
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            match args.format.unwrap_or(Format::Csv) {
                Format::Csv => run_to(sim, CsvWriter::new(dir)?, dir)?,
                Format::Json => run_to(sim, JsonWriter::new(dir)?, dir)?,
            }
        }
    };
    let elapsed = t0.elapsed();

    report(&config, &output, rows, elapsed)?;
    Ok(())
}

/// Run while streaming output to `writer`, surfacing any write error.
fn run_to<W: OutputWriter>(
    sim:    Sim,
    writer: W,
    dir:    &Path,
) -> Result<(SimOutput, (usize, usize))> {
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));
    let result = sim.run(&mut obs);

    if result.is_err() {
        // on_sim_end never fired; close what was written so far.
        if let Err(e) = obs.inner.finish() {
            log::warn!("failed to flush partial output: {e}");
        }
    }
    let output = result?;
    if let Some(e) = obs.inner.take_error() {
        return Err(e).with_context(|| format!("failed to write output to {}", dir.display()));
    }
    log::info!("output written to {}", dir.display());
    Ok((output, (obs.snapshot_rows, obs.summary_rows)))
}

fn run_with<O: SimObserver>(sim: Sim, inner: O) -> Result<(SimOutput, (usize, usize))> {
    let mut obs = CountingObserver::new(inner);
    let output = sim.run(&mut obs)?;
    Ok((output, (obs.snapshot_rows, obs.summary_rows)))
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Mean share of same-group agents among each agent's `k` nearest
/// neighbors.  0.5 is a well-mixed population, 1.0 full segregation.
fn same_group_share(snapshot: &Snapshot, k: usize) -> SegResult<f64> {
    if snapshot.is_empty() || k == 0 {
        return Ok(0.0);
    }
    let mut total = 0;
    for (agent, pos, group) in snapshot.iter() {
        total += nearest_neighbors(snapshot, agent, pos, k)?
            .into_iter()
            .filter(|&n| snapshot.group(n) == group)
            .count();
    }
    Ok(total as f64 / (snapshot.len() * k) as f64)
}

fn report(config: &SimConfig, output: &SimOutput, rows: (usize, usize), elapsed: Duration) -> Result<()> {
    let (snapshot_rows, summary_rows) = rows;
    let rounds = output.snapshots.len().saturating_sub(1);

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} agents, rule {}/{}, seed {}",
        config.agent_count, config.same_type_threshold, config.neighbor_count, config.seed
    );
    println!(
        "  {rounds} of {} rounds run ({})",
        config.iterations,
        if output.converged { "converged" } else { "budget exhausted" }
    );
    if let (Some(first), Some(last)) = (output.summaries.first(), output.summaries.last()) {
        println!("  unhappy agents: {} → {}", first.unhappy, last.unhappy);
    }
    if let (Some(first), Some(last)) = (output.snapshots.first(), output.snapshots.last()) {
        println!(
            "  same-group neighbor share: {:.3} → {:.3}",
            same_group_share(first, config.neighbor_count)?,
            same_group_share(last, config.neighbor_count)?,
        );
        println!(
            "  groups: {} A / {} B",
            first.count_group(Group::A),
            first.count_group(Group::B)
        );
    }
    println!("  snapshot rows: {snapshot_rows}  |  summary rows: {summary_rows}");
    Ok(())
}
