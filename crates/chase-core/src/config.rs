//! Simulation configuration.
//!
//! Typically assembled by the application crate from defaults, a config file
//! and command-line overrides, then handed to the simulation builder.

use crate::error::{ChaseError, ChaseResult, require_positive};

/// Everything the engine needs at construction time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseConfig {
    /// Maximum number of rounds to run.  Must be at least 1.
    pub round_limit: u32,

    /// Number of sheep spawned at start.  Must be at least 1.
    pub prey_count: usize,

    /// Half-width `L` of the square spawn region `[-L, L] × [-L, L]`.
    pub spawn_limit: f64,

    /// Distance a sheep covers in one cardinal step.
    pub prey_step: f64,

    /// Maximum distance the wolf covers in one round.
    pub predator_step: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            round_limit:   50,
            prey_count:    15,
            spawn_limit:   10.0,
            prey_step:     0.5,
            predator_step: 1.0,
            seed:          0,
        }
    }
}

impl ChaseConfig {
    /// Check every field; the first violation is returned as
    /// [`ChaseError::InvalidConfiguration`].
    pub fn validate(&self) -> ChaseResult<()> {
        if self.round_limit == 0 {
            return Err(ChaseError::InvalidConfiguration(
                "round limit must be at least 1".into(),
            ));
        }
        if self.prey_count == 0 {
            return Err(ChaseError::InvalidConfiguration(
                "prey count must be at least 1".into(),
            ));
        }
        if u32::try_from(self.prey_count).is_err() {
            return Err(ChaseError::InvalidConfiguration(format!(
                "prey count {} exceeds the addressable maximum",
                self.prey_count
            )));
        }
        require_positive("spawn limit", self.spawn_limit)?;
        require_positive("sheep movement distance", self.prey_step)?;
        require_positive("wolf movement distance", self.predator_step)?;
        Ok(())
    }
}
