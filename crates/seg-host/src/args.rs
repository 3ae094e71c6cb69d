//! Decoding of the positional argument list.

use serde_json::Value;

use seg_core::SimConfig;

use crate::{HostError, HostResult};

/// Positional parameter names, in call order.
pub const ARGUMENT_NAMES: [&str; 4] = ["agentCount", "neighborCount", "sameTypeThreshold", "iterations"];

/// Build a [`SimConfig`] from `(agentCount, neighborCount, sameTypeThreshold,
/// iterations)`.
///
/// Hosts that only have floating-point numbers may pass whole floats such as
/// `1000.0`.  Fractions, negatives, and non-numbers are rejected.  The
/// returned config has not been validated yet.
pub fn parse_args(args: &[Value], seed: u64) -> HostResult<SimConfig> {
    let [agents, neighbors, threshold, iterations] = args else {
        return Err(HostError::ArgumentCount { got: args.len() });
    };

    let mut config = SimConfig::new(
        to_usize(1, agents)?,
        to_usize(2, neighbors)?,
        to_usize(3, threshold)?,
        to_u64(4, iterations)?,
    );
    config.seed = seed;
    Ok(config)
}

fn to_u64(position: usize, value: &Value) -> HostResult<u64> {
    let invalid = || HostError::InvalidArgument {
        position,
        name: ARGUMENT_NAMES[position - 1],
        value: value.clone(),
    };

    if let Some(n) = value.as_u64() {
        return Ok(n);
    }
    match value.as_f64() {
        // `u64::MAX as f64` rounds up to 2^64, which does not fit.
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(invalid()),
    }
}

fn to_usize(position: usize, value: &Value) -> HostResult<usize> {
    let n = to_u64(position, value)?;
    usize::try_from(n).map_err(|_| HostError::ArgumentOverflow {
        position,
        name: ARGUMENT_NAMES[position - 1],
        value: n,
    })
}
