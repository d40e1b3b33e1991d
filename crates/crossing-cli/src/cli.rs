//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AreaArgs, CurvesArgs, IntegralArgs, RootArgs};

/// Crossing - curve intersections and enclosed areas
#[derive(Parser)]
#[command(name = "crossing")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the settings file, then `table`)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Settings file (TOML)
    #[arg(long, global = true, env = "CROSSING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Area enclosed by e^x + 2, -2x + 8 and -5/x
    Area(AreaArgs),

    /// Crossing point of two curves inside a bracket
    Root(RootArgs),

    /// Signed area between two curves over an interval
    Integral(IntegralArgs),

    /// List the available curves
    Curves(CurvesArgs),
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
