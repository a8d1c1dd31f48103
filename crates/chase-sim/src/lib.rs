//! `chase-sim`: round loop orchestrator for the wolf-and-sheep chase.
//!
//! # Round loop
//!
//! ```text
//! for round in 1..=config.round_limit:
//!   ① Graze   : every live sheep asks the GrazeModel for a step.
//!   ② Target  : nearest live sheep to the wolf (squared distance,
//!               first index wins ties).
//!   ③ Pursue  : wolf takes one bounded step toward it; within reach
//!               means the wolf lands on it and the sheep is caught.
//!   ④ Count   : live count recomputed from the prey vector.
//!   ⑤ Report  : RoundOutcome handed to the SimObserver.
//!   stop when the live count reaches zero.
//! ```
//!
//! The engine performs no I/O.  Logging, printing and persistence are
//! observers supplied by the caller.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use chase_core::ChaseConfig;
//! use chase_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(ChaseConfig::default()).build()?;
//! let result = sim.run(&mut NoopObserver)?;
//! println!("{} after {} rounds", result.status, result.rounds);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CollectingObserver, NoopObserver, SimObserver};
pub use outcome::{RoundOutcome, SimStatus, SimulationResult};
pub use sim::{Sim, SimState};
