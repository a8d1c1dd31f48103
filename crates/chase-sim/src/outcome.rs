//! Values the engine hands to its observers.

use std::fmt;

use chase_agent::PreyState;
use chase_core::{Position, PreyId};

/// Snapshot of the meadow at the end of one round.
///
/// This is the only thing reporting and persistence collaborators ever see.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: u32,

    /// Wolf position after its step.
    pub predator: Position,

    /// Every sheep in stable index order.
    pub prey: Vec<PreyState>,

    /// The sheep the wolf chased this round.
    pub target: PreyId,

    /// Whether `target` was caught this round.
    pub captured: bool,

    /// Live sheep remaining after this round.
    pub live_count: usize,

    /// `true` when this round caught the last sheep.
    pub terminal: bool,
}

impl RoundOutcome {
    /// The sheep caught this round, if any.  At most one per round.
    #[inline]
    pub fn caught(&self) -> Option<PreyId> {
        self.captured.then_some(self.target)
    }

    /// Sheep coordinates in index order, `None` for caught sheep.
    pub fn prey_positions(&self) -> impl Iterator<Item = Option<Position>> + '_ {
        self.prey.iter().map(|s| s.position())
    }
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimStatus {
    AllCaught,
    RoundLimitReached,
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimStatus::AllCaught         => write!(f, "all sheep caught"),
            SimStatus::RoundLimitReached => write!(f, "round limit reached"),
        }
    }
}

/// Summary returned by [`Sim::run`][crate::Sim::run].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub status:     SimStatus,
    /// Rounds actually executed.
    pub rounds:     u32,
    /// Live sheep at the end.
    pub live_count: usize,
    /// Final wolf position.
    pub predator:   Position,
}
