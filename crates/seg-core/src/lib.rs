//! `seg-core` — foundational types for the Schelling segregation engine.
//!
//! This crate is a dependency of every other `seg-*` crate.  It has no
//! `seg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `Iteration`                                |
//! | [`geo`]         | `Point`, Euclidean distance, unit-square sampling     |
//! | [`group`]       | `Group` (the binary agent type)                       |
//! | [`config`]      | `SimConfig`, `HappinessRule`, `PlacementPolicy`       |
//! | [`rng`]         | `AgentRng` (per-search), `SimRng` (driver)            |
//! | [`error`]       | `SegError`, `SegResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod group;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{HappinessRule, PlacementPolicy, SimConfig};
pub use error::{SegError, SegResult};
pub use geo::Point;
pub use group::Group;
pub use ids::{AgentId, Iteration};
pub use rng::{AgentRng, SimRng};
