//! Fluent builder for constructing a [`Sim`].

use seg_agent::{PopulationBuilder, Snapshot};
use seg_core::{SegError, SimConfig, SimRng};

use crate::{Relocator, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population size, rule, iteration budget, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                   |
/// |----------------------------|-------------------------------------------|
/// | `.rng(r)`                  | `SimRng::new(config.seed)`                |
/// | `.initial_snapshot(s)`     | Uniform random population from the RNG    |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig::new(1_000, 10, 5, 20).with_seed(42)).build()?;
/// let output = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    rng:     Option<SimRng>,
    initial: Option<Snapshot>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            rng:     None,
            initial: None,
        }
    }

    /// Supply the random source explicitly instead of seeding from
    /// `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Start from a given population instead of a random one.
    ///
    /// Must hold exactly `config.agent_count` agents, all inside the unit
    /// square.
    pub fn initial_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.initial = Some(snapshot);
        self
    }

    /// Validate inputs, generate the initial population if needed, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;

        let rule = config.rule();
        if !rule.is_reachable() {
            log::warn!(
                "same_type_threshold {} exceeds neighbor_count {}; no agent can ever be happy",
                rule.same_type_threshold,
                rule.neighbor_count,
            );
        }

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(config.seed));

        let initial = match self.initial {
            Some(s) => {
                if s.len() != config.agent_count {
                    return Err(SegError::LengthMismatch {
                        expected: config.agent_count,
                        got:      s.len(),
                        what:     "initial snapshot",
                    }
                    .into());
                }
                if let Some((agent, pos, _)) = s.iter().find(|(_, p, _)| !p.in_unit_square()) {
                    return Err(SegError::Config(format!(
                        "initial position of {agent} is outside the unit square: {pos}"
                    ))
                    .into());
                }
                s
            }
            None => PopulationBuilder::new(config.agent_count).build(&mut rng),
        };

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        #[cfg(not(feature = "parallel"))]
        if config.num_threads.is_some() {
            log::debug!("num_threads ignored: built without the `parallel` feature");
        }

        log::debug!(
            "built sim: {} agents, rule {}/{}, up to {} iterations",
            config.agent_count,
            rule.same_type_threshold,
            rule.neighbor_count,
            config.iterations,
        );

        Ok(Sim {
            relocator: Relocator::new(rule, config.placement),
            config,
            rng,
            initial,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
