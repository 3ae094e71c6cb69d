//! `seg-agent` — population storage for the Schelling segregation engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`snapshot`]    | `Snapshot` (SoA positions + groups)                       |
//! | [`builder`]     | `PopulationBuilder` (uniform random initial population)   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | `Snapshot` (de)serializes as `[(x, y, type), …]`.          |

pub mod builder;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use snapshot::Snapshot;
