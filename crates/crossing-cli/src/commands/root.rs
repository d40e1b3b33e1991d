//! Root command implementation.
//!
//! Finds where two catalog curves cross inside a bracket.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crossing_math::functions::{Curve, RealFunction};
use crossing_math::interval::Interval;
use crossing_math::solvers::find_root;

use crate::cli::OutputFormat;
use crate::commands::pair_label;
use crate::output::{format_point, print_header, print_output, print_report, KeyValue};
use crate::settings::Settings;

/// Arguments for the root command.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// First curve (see `crossing curves`)
    pub f: Curve,

    /// Second curve
    pub g: Curve,

    /// One end of the bracket
    #[arg(long, allow_negative_numbers = true)]
    pub from: f64,

    /// Other end of the bracket
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,

    /// Bracket half-width at which the search stops
    #[arg(short = 'e', long, env = "CROSSING_ROOT_TOLERANCE")]
    pub precision: Option<f64>,

    /// Iteration cap
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

/// Root search result.
#[derive(Debug, Serialize)]
pub struct RootReport {
    pub curves: String,
    pub x: f64,
    pub y: f64,
    pub iterations: u64,
    pub residual: f64,
}

/// Execute the root command.
pub fn execute(args: RootArgs, settings: Settings, format: OutputFormat) -> Result<()> {
    let settings = settings.with_overrides(args.precision, None, args.max_iterations)?;
    let bracket = Interval::ordered(args.from, args.to);

    info!("searching {} on {}", pair_label(args.f, args.g), bracket);
    let result = find_root(
        &args.f,
        &args.g,
        bracket.lo(),
        bracket.hi(),
        &settings.solver_config(),
    )?;

    let report = RootReport {
        curves: pair_label(args.f, args.g),
        x: result.root,
        y: args.f.value(result.root),
        iterations: result.iterations,
        residual: result.residual,
    };

    match format {
        OutputFormat::Json => print_report(&report)?,
        OutputFormat::Minimal => println!("{:.5}", report.x),
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new("Curves", report.curves.clone()),
                KeyValue::new("Bracket", bracket.to_string()),
                KeyValue::new("Point", format_point(report.x, report.y)),
                KeyValue::new("Iterations", report.iterations.to_string()),
                KeyValue::new("Residual", format!("{:.2e}", report.residual)),
            ];
            if format == OutputFormat::Table {
                print_header("Crossing point");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}
