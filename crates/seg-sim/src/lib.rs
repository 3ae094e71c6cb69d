//! `seg-sim` — iteration driver for the Schelling segregation engine.
//!
//! # Round structure
//!
//! ```text
//! snapshot 0 = random population (or an injected one)
//! for round in 1..=config.iterations:
//!   ① Copy      — clone the last recorded snapshot.
//!   ② Detect    — is_happy for every agent (parallel with `parallel`);
//!                 empty set → converged, stop.
//!   ③ Search    — per unhappy agent, draw uniform candidates until one
//!                 satisfies is_happy_at against the frozen copy
//!                 (parallel, bounded by PlacementPolicy, cancellable).
//!   ④ Apply     — write all chosen locations in one sequential pass.
//!   ⑤ Record    — append the copy as snapshot `round`.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs detect and search on Rayon (default).             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use seg_core::SimConfig;
//! use seg_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(1_000, 10, 5, 20).with_seed(42);
//! let output = SimBuilder::new(config).build()?.run(&mut NoopObserver)?;
//! println!("{} snapshots, converged: {}", output.snapshots.len(), output.converged);
//! ```

pub mod builder;
pub mod detector;
pub mod error;
pub mod neighborhood;
pub mod observer;
pub mod relocator;
pub mod sim;


pub use builder::SimBuilder;
pub use detector::find_unhappy;
pub use error::{SimError, SimResult};
pub use neighborhood::{check_neighborhood, is_happy, is_happy_at, nearest_neighbors};
pub use observer::{NoopObserver, SimObserver};
pub use relocator::{Relocator, SearchFailure};
pub use sim::{IterationSummary, Sim, SimOutput};

use seg_agent::Snapshot;
use seg_core::SimConfig;

/// Run a whole simulation and return the recorded snapshots.
///
/// The sequence holds the initial population followed by one snapshot per
/// completed round; its length is between 1 and `config.iterations + 1`.
/// The configuration is validated before any work starts.
pub fn simulate(config: &SimConfig) -> SimResult<Vec<Snapshot>> {
    let output = SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)?;
    Ok(output.snapshots)
}
