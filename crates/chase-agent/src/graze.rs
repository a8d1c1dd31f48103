//! How sheep pick their next step.
//!
//! The engine asks a [`GrazeModel`] once per live sheep per round.  The
//! default [`RandomWalk`] draws one of the four cardinal directions
//! uniformly; [`Stationary`] keeps every sheep in place, which makes pursuit
//! geometry testable in isolation.

use chase_core::{Position, PreyId, SimRng};

/// One of the four cardinal grazing directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Displacement of a step of length `step` in this direction.
    /// North/south move along y, east/west along x.
    #[inline]
    pub fn offset(self, step: f64) -> Position {
        match self {
            Direction::North => Position::new(0.0, step),
            Direction::South => Position::new(0.0, -step),
            Direction::East  => Position::new(step, 0.0),
            Direction::West  => Position::new(-step, 0.0),
        }
    }
}

/// Pluggable sheep movement.
///
/// Returning `None` means the sheep stays put this round.
pub trait GrazeModel {
    fn next_step(&self, prey: PreyId, rng: &mut SimRng) -> Option<Direction>;
}

/// Uniform random cardinal walk.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomWalk;

impl GrazeModel for RandomWalk {
    fn next_step(&self, _prey: PreyId, rng: &mut SimRng) -> Option<Direction> {
        rng.choose(&Direction::ALL).copied()
    }
}

/// Sheep never move.  Consumes no randomness.
#[derive(Copy, Clone, Debug, Default)]
pub struct Stationary;

impl GrazeModel for Stationary {
    fn next_step(&self, _prey: PreyId, _rng: &mut SimRng) -> Option<Direction> {
        None
    }
}
