//! Deterministic per-search and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! The driver owns one `SimRng` seeded from `SimConfig::seed`.  At the start
//! of every relocation round it draws a fresh round seed, and each unhappy
//! agent's search gets its own `SmallRng` seeded by:
//!
//!   seed = round_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Searches never share RNG state, so the chosen locations do not depend on
//! which Rayon worker ran which search.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Point};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// RNG owned by a single agent's relocation search.
///
/// Created inside the parallel phase and dropped when the search ends; it is
/// never shared between threads.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a round seed and an agent ID.
    pub fn new(round_seed: u64, agent: AgentId) -> Self {
        let seed = round_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a candidate location uniformly from the unit square.
    #[inline]
    pub fn unit_point(&mut self) -> Point {
        Point::random_unit(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for the initial population and round seeds.
///
/// Used only from the single-threaded driver.  This is the injectable random
/// source: two runs built from equal `SimRng`s produce equal output.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Draw the seed for one relocation round.
    #[inline]
    pub fn round_seed(&mut self) -> u64 {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn unit_point(&mut self) -> Point {
        Point::random_unit(&mut self.0)
    }
}
