//! The `Sim` struct and its round loop.

use chase_agent::{GrazeModel, Predator, Prey};
use chase_core::{ChaseConfig, ChaseError, Position, PreyId, SimRng};

use crate::{RoundOutcome, SimObserver, SimResult, SimStatus, SimulationResult};

/// Engine lifecycle.  `Terminated` is final.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimState {
    Running,
    Terminated(SimStatus),
}

/// The chase engine.
///
/// Owns every sheep, the wolf, and the single random source.  Nothing is
/// shared; observers only ever see cloned [`RoundOutcome`]s.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<M: GrazeModel> {
    pub(crate) config:     ChaseConfig,
    pub(crate) rng:        SimRng,
    pub(crate) prey:       Vec<Prey>,
    pub(crate) predator:   Predator,
    pub(crate) graze:      M,
    /// Rounds completed so far.
    pub(crate) round:      u32,
    pub(crate) live_count: usize,
    pub(crate) state:      SimState,
}

impl<M: GrazeModel> Sim<M> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ChaseConfig {
        &self.config
    }

    pub fn prey(&self) -> &[Prey] {
        &self.prey
    }

    pub fn predator(&self) -> &Predator {
        &self.predator
    }

    /// Rounds completed so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, SimState::Terminated(_))
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every sheep is caught or `config.round_limit` rounds have
    /// executed, whichever comes first.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimulationResult> {
        while !self.is_terminated() {
            self.step_observed(observer)?;
        }
        let result = self.result();
        observer.on_sim_end(&result);
        Ok(result)
    }

    /// Run at most `n` more rounds, stopping early on termination.
    ///
    /// Useful for tests and incremental stepping.  Returns the number of
    /// rounds actually executed.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<u32> {
        let mut executed = 0;
        while executed < n && !self.is_terminated() {
            self.step_observed(observer)?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Summary of the run so far.  `status` is `RoundLimitReached` until the
    /// last sheep is caught.
    pub fn result(&self) -> SimulationResult {
        let status = match self.state {
            SimState::Terminated(status) => status,
            SimState::Running            => SimStatus::RoundLimitReached,
        };
        SimulationResult {
            status,
            rounds:     self.round,
            live_count: self.live_count,
            predator:   self.predator.position(),
        }
    }

    /// Execute exactly one round.
    ///
    /// Returns [`ChaseError::Logic`] if the engine has already terminated.
    pub fn run_round(&mut self) -> SimResult<RoundOutcome> {
        if let SimState::Terminated(status) = self.state {
            return Err(ChaseError::Logic(format!(
                "round {} requested after termination ({status})",
                self.round + 1
            ))
            .into());
        }
        let round = self.round + 1;

        // ── Phase 1: graze ────────────────────────────────────────────────
        //
        // Sequential in index order so RNG draws are reproducible.
        for (i, prey) in self.prey.iter_mut().enumerate() {
            if !prey.is_alive() {
                continue;
            }
            if let Some(direction) = self.graze.next_step(PreyId(i as u32), &mut self.rng) {
                prey.step(direction);
            }
        }

        // ── Phase 2: target selection ─────────────────────────────────────
        let (target, target_pos) = self.find_nearest_live_prey().ok_or_else(|| {
            ChaseError::Logic(format!("round {round} started with no live sheep"))
        })?;

        // ── Phase 3: pursuit and capture ──────────────────────────────────
        let captured = self.predator.step_toward(target_pos);
        if captured {
            self.prey[target.index()].mark_caught()?;
        }

        // ── Phase 4: bookkeeping ──────────────────────────────────────────
        self.live_count = self.prey.iter().filter(|p| p.is_alive()).count();
        self.round = round;

        let terminal = self.live_count == 0;
        if terminal {
            self.state = SimState::Terminated(SimStatus::AllCaught);
        } else if round >= self.config.round_limit {
            self.state = SimState::Terminated(SimStatus::RoundLimitReached);
        }

        Ok(RoundOutcome {
            round,
            predator: self.predator.position(),
            prey: self.prey.iter().map(Prey::state).collect(),
            target,
            captured,
            live_count: self.live_count,
            terminal,
        })
    }

    /// The live sheep closest to the wolf, with its position.
    ///
    /// Compares squared distances; the first sheep in index order wins ties.
    /// Returns `None` when no sheep is alive.
    pub fn find_nearest_live_prey(&self) -> Option<(PreyId, Position)> {
        nearest_live(&self.prey, self.predator.position())
    }

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_round_start(self.round + 1);
        let outcome = self.run_round()?;
        observer.on_round_end(&outcome);
        Ok(())
    }
}

/// Linear nearest-neighbour scan over live sheep.
pub(crate) fn nearest_live(prey: &[Prey], from: Position) -> Option<(PreyId, Position)> {
    let mut best: Option<(PreyId, Position, f64)> = None;
    for (i, p) in prey.iter().enumerate() {
        let Some(pos) = p.position() else { continue };
        let d = from.distance_sq(pos);
        if best.is_none_or(|(_, _, best_d)| d < best_d) {
            best = Some((PreyId(i as u32), pos, d));
        }
    }
    best.map(|(id, pos, _)| (id, pos))
}
