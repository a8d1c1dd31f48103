//! Fluent builder for constructing a [`Sim`].

use chase_agent::{GrazeModel, Predator, Prey, RandomWalk};
use chase_core::{ChaseConfig, Position, SimRng};

use crate::{Sim, SimError, SimResult, SimState};

/// Fluent builder for [`Sim<M>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                     |
/// |------------------------|---------------------------------------------|
/// | `.graze(m)`            | [`RandomWalk`]                              |
/// | `.prey_positions(v)`   | Uniform in `[-spawn_limit, spawn_limit]²`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .graze(Stationary)
///     .prey_positions(vec![Position::new(0.3, 0.4)])
///     .build()?;
/// ```
pub struct SimBuilder<M: GrazeModel = RandomWalk> {
    config:    ChaseConfig,
    graze:     M,
    positions: Option<Vec<Position>>,
}

impl SimBuilder<RandomWalk> {
    pub fn new(config: ChaseConfig) -> Self {
        Self { config, graze: RandomWalk, positions: None }
    }
}

impl<M: GrazeModel> SimBuilder<M> {
    /// Replace the grazing model.
    pub fn graze<N: GrazeModel>(self, graze: N) -> SimBuilder<N> {
        SimBuilder { config: self.config, graze, positions: self.positions }
    }

    /// Place the sheep explicitly instead of spawning them at random.
    ///
    /// Must be length `config.prey_count`.
    pub fn prey_positions(mut self, positions: Vec<Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, spawn the sheep and place the wolf at the origin.
    pub fn build(self) -> SimResult<Sim<M>> {
        self.config.validate()?;
        let mut rng = SimRng::new(self.config.seed);

        let prey = match self.positions {
            Some(p) => {
                if p.len() != self.config.prey_count {
                    return Err(SimError::PreyCountMismatch {
                        expected: self.config.prey_count,
                        got:      p.len(),
                    });
                }
                p.into_iter()
                    .map(|pos| Prey::new(pos, self.config.prey_step))
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => (0..self.config.prey_count)
                .map(|_| Prey::spawn(&mut rng, self.config.spawn_limit, self.config.prey_step))
                .collect::<Result<Vec<_>, _>>()?,
        };

        let predator = Predator::new(self.config.predator_step)?;
        let live_count = prey.len();

        Ok(Sim {
            config: self.config,
            rng,
            prey,
            predator,
            graze: self.graze,
            round: 0,
            live_count,
            state: SimState::Running,
        })
    }
}
