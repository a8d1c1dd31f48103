//! The wolf.

use chase_core::error::require_positive;
use chase_core::{ChaseResult, Position};

/// The single pursuer.  Starts at the origin and moves at most
/// `step_distance` per round.
#[derive(Clone, Debug)]
pub struct Predator {
    position:      Position,
    step_distance: f64,
}

impl Predator {
    /// Fails with `InvalidConfiguration` unless `step_distance` is positive
    /// and finite.
    pub fn new(step_distance: f64) -> ChaseResult<Self> {
        Self::at(Position::ORIGIN, step_distance)
    }

    /// Like [`new`](Self::new) but starting somewhere other than the origin.
    pub fn at(position: Position, step_distance: f64) -> ChaseResult<Self> {
        let step_distance = require_positive("wolf movement distance", step_distance)?;
        Ok(Self { position, step_distance })
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Take one bounded step toward `target`.
    ///
    /// If the target is within `step_distance` (Euclidean, inclusive) the
    /// wolf lands exactly on it and `true` is returned.  A target at the
    /// wolf's own position counts as caught.  Otherwise the wolf advances
    /// `step_distance` along the unit vector toward the target and `false`
    /// is returned.
    pub fn step_toward(&mut self, target: Position) -> bool {
        let r = self.position.distance(target);

        if r <= self.step_distance {
            self.position = target;
            return true;
        }

        let delta = target - self.position;
        let step = Position::new(
            delta.x * self.step_distance / r,
            delta.y * self.step_distance / r,
        );
        self.position = self.position + step;
        false
    }
}
