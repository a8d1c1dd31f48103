//! Plain record types written by output backends.
//!
//! Field names and numbering follow the files existing consumers already
//! read: positions are `{"pos_x", "pos_y"}` objects (both `null` for an
//! eaten sheep) and `alive.csv` counts rounds from 0.

use chase_core::Position;
use chase_sim::RoundOutcome;
use serde::{Deserialize, Serialize};

/// A coordinate pair as stored in `pos.json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosRecord {
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
}

impl From<Option<Position>> for PosRecord {
    fn from(pos: Option<Position>) -> Self {
        Self {
            pos_x: pos.map(|p| p.x),
            pos_y: pos.map(|p| p.y),
        }
    }
}

/// One element of the `pos.json` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_no:  u32,
    pub wolf_pos:  PosRecord,
    pub sheep_pos: Vec<PosRecord>,
}

impl From<&RoundOutcome> for RoundRecord {
    fn from(outcome: &RoundOutcome) -> Self {
        Self {
            round_no:  outcome.round,
            wolf_pos:  Some(outcome.predator).into(),
            sheep_pos: outcome.prey_positions().map(PosRecord::from).collect(),
        }
    }
}

/// One row of `alive.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AliveCountRow {
    /// 0-based: the first round is written as `0`.
    pub round_number:      u32,
    pub sheep_alive_count: usize,
}

impl AliveCountRow {
    pub const HEADER: [&'static str; 2] = ["round_number", "sheep_alive_count"];
}

impl From<&RoundOutcome> for AliveCountRow {
    fn from(outcome: &RoundOutcome) -> Self {
        Self {
            round_number:      outcome.round.saturating_sub(1),
            sheep_alive_count: outcome.live_count,
        }
    }
}
