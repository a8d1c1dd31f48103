//! `chase-core`: foundational types for the wolf-and-sheep chase simulation.
//!
//! Every other `chase-*` crate depends on this one.  It has no `chase-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`geo`]    | `Position`, Euclidean distance helpers            |
//! | [`ids`]    | `PreyId`                                          |
//! | [`rng`]    | `SimRng` (the single seeded random source)        |
//! | [`config`] | `ChaseConfig`                                     |
//! | [`error`]  | `ChaseError`, `ChaseResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.|

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ChaseConfig;
pub use error::{ChaseError, ChaseResult};
pub use geo::Position;
pub use ids::PreyId;
pub use rng::SimRng;
