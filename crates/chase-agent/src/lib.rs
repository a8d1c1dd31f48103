//! `chase-agent`: the two kinds of entity on the meadow.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`prey`]       | `Prey`, `PreyState` (`Alive(Position)` / `Caught`)         |
//! | [`predator`]   | `Predator` and its bounded `step_toward`                   |
//! | [`graze`]      | `Direction`, `GrazeModel` trait, `RandomWalk`, `Stationary`|
//!
//! Entities hold no RNG of their own; randomness is drawn by the engine from
//! its single `SimRng` and passed in through [`GrazeModel`].

pub mod graze;
pub mod predator;
pub mod prey;


pub use graze::{Direction, GrazeModel, RandomWalk, Stationary};
pub use predator::Predator;
pub use prey::{Prey, PreyState};
