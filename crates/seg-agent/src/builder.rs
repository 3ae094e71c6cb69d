//! Random initial population.
//!
//! # Usage
//!
//! ```rust
//! use seg_agent::PopulationBuilder;
//! use seg_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let snapshot = PopulationBuilder::new(1_000).build(&mut rng);
//!
//! assert_eq!(snapshot.len(), 1_000);
//! assert!(snapshot.positions().iter().all(|p| p.in_unit_square()));
//! ```

use seg_core::{Group, SimRng};

use crate::Snapshot;

/// Builder for the iteration-0 [`Snapshot`].
///
/// Every agent gets an independent uniform position in `[0, 1)²` and an
/// independent group draw (fair coin unless overridden).
pub struct PopulationBuilder {
    count:   usize,
    share_b: f64,
}

impl PopulationBuilder {
    pub fn new(count: usize) -> Self {
        Self { count, share_b: 0.5 }
    }

    /// Probability that an agent is assigned [`Group::B`] (clamped to
    /// `[0, 1]`).
    pub fn share_b(mut self, p: f64) -> Self {
        self.share_b = p;
        self
    }

    /// Draw positions and groups from `rng`.
    ///
    /// Position and group are drawn per agent in index order, so the same
    /// seed always yields the same population.
    pub fn build(self, rng: &mut SimRng) -> Snapshot {
        (0..self.count)
            .map(|_| {
                let point = rng.unit_point();
                let group = Group::from(rng.gen_bool(self.share_b));
                (point, group)
            })
            .collect()
    }
}
