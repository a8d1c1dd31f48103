//! Simulation observer trait for progress reporting and data collection.

use crate::{RoundOutcome, SimulationResult};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at round boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers get read-only views; nothing an
/// observer does can alter the simulation.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct AlivePrinter;
///
/// impl SimObserver for AlivePrinter {
///     fn on_round_end(&mut self, outcome: &RoundOutcome) {
///         println!("round {}: {} alive", outcome.round, outcome.live_count);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before any processing of `round` (1-based).
    fn on_round_start(&mut self, _round: u32) {}

    /// Called once the round's outcome is final.
    fn on_round_end(&mut self, _outcome: &RoundOutcome) {}

    /// Called once after the last round.
    fn on_sim_end(&mut self, _result: &SimulationResult) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every [`RoundOutcome`] in memory.
#[derive(Default)]
pub struct CollectingObserver {
    pub outcomes: Vec<RoundOutcome>,
    pub result:   Option<SimulationResult>,
}

impl SimObserver for CollectingObserver {
    fn on_round_end(&mut self, outcome: &RoundOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn on_sim_end(&mut self, result: &SimulationResult) {
        self.result = Some(*result);
    }
}
