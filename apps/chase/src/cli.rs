//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chase")]
#[command(version)]
#[command(about = "Wolf vs sheep pursuit simulation")]
pub struct Cli {
    /// Configuration file (INI)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write log records at this level and above to chase.log
    #[arg(short, long, value_enum, ignore_case = true)]
    pub log: Option<LogLevel>,

    /// Maximum number of rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Number of sheep
    #[arg(short, long)]
    pub sheep: Option<usize>,

    /// Pause after each round until Enter is pressed
    #[arg(short, long)]
    pub wait: bool,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for pos.json and alive.csv
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `tracing` has no level above ERROR, so CRITICAL shares it.
    pub fn filter_directive(self) -> &'static str {
        match self {
            LogLevel::Debug                     => "debug",
            LogLevel::Info                      => "info",
            LogLevel::Warning                   => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}
