//! Run settings: built-in defaults, then the config file, then CLI flags.
//!
//! # Config file
//!
//! ```ini
//! [Sheep]
//! InitPosLimit = 10.0
//! MoveDist = 0.5
//!
//! [Wolf]
//! MoveDist = 1.0
//! ```
//!
//! Every section and key is optional.  Keys are matched case-insensitively.

use std::path::Path;

use anyhow::{Context, Result};
use chase_core::ChaseConfig;
use chase_core::error::require_positive;
use ini::Ini;

use crate::cli::Cli;

#[derive(Debug, Default)]
pub struct FileConfig {
    pub sheep: SheepSection,
    pub wolf:  WolfSection,
}

#[derive(Debug)]
pub struct SheepSection {
    pub init_pos_limit: f64,
    pub move_dist:      f64,
}

impl Default for SheepSection {
    fn default() -> Self {
        let d = ChaseConfig::default();
        Self { init_pos_limit: d.spawn_limit, move_dist: d.prey_step }
    }
}

#[derive(Debug)]
pub struct WolfSection {
    pub move_dist: f64,
}

impl Default for WolfSection {
    fn default() -> Self {
        Self { move_dist: ChaseConfig::default().predator_step }
    }
}

/// Read `section.key` as a float, or `default` when either is absent.
fn float_or(ini: &Ini, section: &str, key: &str, default: f64) -> Result<f64> {
    let raw = ini.section(Some(section)).and_then(|props| props.get(key));
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .with_context(|| format!("[{section}] {key} = {raw:?} is not a number")),
        None => Ok(default),
    }
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text)?;
        let defaults = FileConfig::default();

        let config = FileConfig {
            sheep: SheepSection {
                init_pos_limit: float_or(&ini, "Sheep", "InitPosLimit", defaults.sheep.init_pos_limit)?,
                move_dist:      float_or(&ini, "Sheep", "MoveDist", defaults.sheep.move_dist)?,
            },
            wolf: WolfSection {
                move_dist: float_or(&ini, "Wolf", "MoveDist", defaults.wolf.move_dist)?,
            },
        };
        require_positive("sheep movement distance", config.sheep.move_dist)?;
        require_positive("wolf movement distance", config.wolf.move_dist)?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Merge defaults, the optional config file and CLI overrides.
///
/// `seed` is used when the CLI does not pin one.  The result is validated.
pub fn resolve(cli: &Cli, seed: u64) -> Result<ChaseConfig> {
    let file = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None       => FileConfig::default(),
    };

    let defaults = ChaseConfig::default();
    let config = ChaseConfig {
        round_limit:   cli.rounds.unwrap_or(defaults.round_limit),
        prey_count:    cli.sheep.unwrap_or(defaults.prey_count),
        spawn_limit:   file.sheep.init_pos_limit,
        prey_step:     file.sheep.move_dist,
        predator_step: file.wolf.move_dist,
        seed:          cli.seed.unwrap_or(seed),
    };
    config.validate()?;
    Ok(config)
}
