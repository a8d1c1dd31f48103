//! Strongly typed prey identifier.
//!
//! A `PreyId` is the prey's insertion index in the simulation's prey vector,
//! which is also the "sheep number" used in reports.

use std::fmt;

/// Index of a prey in the engine's fixed-size prey collection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreyId(pub u32);

impl PreyId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PreyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
