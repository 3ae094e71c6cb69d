//! `seg-host` — call boundary for embedding the engine in a host runtime.
//!
//! The host passes an untyped list of four numbers and receives either the
//! full snapshot sequence or a string describing what went wrong:
//!
//! ```text
//! invoke([1000, 10, 5, 20])  →  [[[x, y, type], …], …]
//! invoke([1000, 10])         →  "Invalid no of arguments passed"
//! invoke([5, 4, 2, 1])       →  "configuration error: neighbor_count must be …"
//! ```
//!
//! `type` is `false` for group A and `true` for group B.  Malformed or
//! out-of-range arguments come back as strings; a well-formed call is still
//! bounded by memory, so a population of billions of agents will abort on
//! allocation.

pub mod args;
pub mod error;

#[cfg(test)]
mod tests;

pub use args::{ARGUMENT_NAMES, parse_args};
pub use error::{HostError, HostResult};

use serde_json::Value;

use seg_sim::{NoopObserver, SimBuilder};

/// Run a simulation with a fresh random seed.
pub fn invoke(args: &[Value]) -> Value {
    let seed = rand::random::<u64>();
    log::debug!("host call with seed {seed}");
    invoke_with_seed(args, seed)
}

/// Run a simulation with a fixed seed.  Equal seeds and arguments give
/// equal results.
pub fn invoke_with_seed(args: &[Value], seed: u64) -> Value {
    match try_invoke(args, seed) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("host call rejected: {e}");
            Value::String(e.to_string())
        }
    }
}

/// Typed variant of [`invoke_with_seed`].
pub fn try_invoke(args: &[Value], seed: u64) -> HostResult<Value> {
    let config = parse_args(args, seed)?;
    let output = SimBuilder::new(config).build()?.run(&mut NoopObserver)?;
    Ok(serde_json::to_value(&output.snapshots)?)
}
