//! The sheep.

use chase_core::error::require_positive;
use chase_core::{ChaseError, ChaseResult, Position, SimRng};

use crate::Direction;

/// Where a sheep is, or the fact that it has been eaten.
///
/// A caught sheep has no position; consumers pattern-match instead of
/// checking sentinel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreyState {
    Alive(Position),
    Caught,
}

impl PreyState {
    #[inline]
    pub fn position(self) -> Option<Position> {
        match self {
            PreyState::Alive(p) => Some(p),
            PreyState::Caught   => None,
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, PreyState::Alive(_))
    }
}

/// A single sheep with a fixed step length.
#[derive(Clone, Debug)]
pub struct Prey {
    state:         PreyState,
    step_distance: f64,
}

impl Prey {
    /// Place a live sheep at `position`.
    ///
    /// Fails with [`ChaseError::InvalidConfiguration`] unless `step_distance`
    /// is positive and finite.
    pub fn new(position: Position, step_distance: f64) -> ChaseResult<Self> {
        let step_distance = require_positive("sheep movement distance", step_distance)?;
        Ok(Self { state: PreyState::Alive(position), step_distance })
    }

    /// Place a live sheep uniformly at random in `[-limit, limit]²`.
    ///
    /// Samples the unit square and scales, so any finite `limit` is safe
    /// (the width `2 * limit` may not be representable).
    pub fn spawn(rng: &mut SimRng, limit: f64, step_distance: f64) -> ChaseResult<Self> {
        let limit = require_positive("spawn limit", limit)?;
        let x = rng.gen_range(-1.0_f64..=1.0) * limit;
        let y = rng.gen_range(-1.0_f64..=1.0) * limit;
        Self::new(Position::new(x, y), step_distance)
    }

    #[inline]
    pub fn state(&self) -> PreyState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.state.position()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Take one step of `step_distance` in `direction`.  A caught sheep
    /// ignores the call.
    ///
    /// The direction comes from a [`GrazeModel`][crate::GrazeModel]; with
    /// [`RandomWalk`][crate::RandomWalk] this is the uniform cardinal move.
    pub fn step(&mut self, direction: Direction) {
        if let PreyState::Alive(p) = self.state {
            self.state = PreyState::Alive(p + direction.offset(self.step_distance));
        }
    }

    /// Mark this sheep eaten.  Irreversible.
    ///
    /// Catching the same sheep twice is an engine bug and is reported as
    /// [`ChaseError::Logic`]; the state is left unchanged.
    pub fn mark_caught(&mut self) -> ChaseResult<()> {
        match self.state {
            PreyState::Alive(_) => {
                self.state = PreyState::Caught;
                Ok(())
            }
            PreyState::Caught => Err(ChaseError::Logic("sheep caught twice".into())),
        }
    }
}
