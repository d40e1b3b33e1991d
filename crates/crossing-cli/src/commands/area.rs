//! Area command implementation.
//!
//! Locates the three pairwise crossings of `e^x + 2`, `-2x + 8` and `-5/x`
//! and integrates the region they enclose.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crossing_math::area::{enclosed_area, AreaConfig, Crossing};

use crate::cli::OutputFormat;
use crate::commands::pair_label;
use crate::output::{format_point, print_header, print_output, print_report, KeyValue};
use crate::settings::Settings;

/// Arguments for the area command.
#[derive(Args, Debug)]
pub struct AreaArgs {
    /// Print the crossing points
    #[arg(short, long)]
    pub points: bool,

    /// Print the iterations spent on each crossing point
    #[arg(short = 'n', long)]
    pub iterations: bool,

    /// Bracket half-width for the crossing points
    #[arg(short = 'e', long, env = "CROSSING_ROOT_TOLERANCE")]
    pub tolerance: Option<f64>,

    /// Precision of the midpoint rule
    #[arg(long, env = "CROSSING_INTEGRAL_PRECISION")]
    pub precision: Option<f64>,

    /// Iteration cap for each crossing point
    #[arg(long)]
    pub max_iterations: Option<u64>,
}

/// One crossing point in the report.
#[derive(Debug, Serialize, Tabled)]
pub struct CrossingRow {
    #[tabled(rename = "Curves")]
    pub curves: String,
    #[tabled(rename = "Point")]
    pub point: String,
    #[tabled(skip)]
    pub x: f64,
    #[tabled(skip)]
    pub y: f64,
    #[tabled(rename = "Iterations")]
    pub iterations: u64,
}

impl From<&Crossing> for CrossingRow {
    fn from(crossing: &Crossing) -> Self {
        Self {
            curves: pair_label(crossing.first, crossing.second),
            point: format_point(crossing.x, crossing.y),
            x: crossing.x,
            y: crossing.y,
            iterations: crossing.iterations,
        }
    }
}

/// Full report for JSON output.
#[derive(Debug, Serialize)]
pub struct AreaReport {
    pub crossings: Vec<CrossingRow>,
    pub left: f64,
    pub right: f64,
    pub area: f64,
}

/// Execute the area command.
pub fn execute(args: AreaArgs, settings: Settings, format: OutputFormat) -> Result<()> {
    let settings = settings.with_overrides(args.tolerance, args.precision, args.max_iterations)?;
    let config = AreaConfig {
        solver: settings.solver_config(),
        precision: settings.integral_precision,
    };

    info!(
        "computing enclosed area (tolerance {:e}, precision {:e})",
        config.solver.tolerance, config.precision
    );
    let area = enclosed_area(&config)?;
    let rows: Vec<CrossingRow> = area.crossings.iter().map(CrossingRow::from).collect();

    match format {
        OutputFormat::Table => {
            if args.points {
                print_header("Crossing points");
                let points: Vec<KeyValue> = rows
                    .iter()
                    .map(|row| KeyValue::new(row.curves.clone(), row.point.clone()))
                    .collect();
                print_output(&points, format)?;
            }
            if args.iterations {
                print_header("Iterations per point");
                let iterations: Vec<KeyValue> = rows
                    .iter()
                    .map(|row| KeyValue::new(row.curves.clone(), row.iterations.to_string()))
                    .collect();
                print_output(&iterations, format)?;
            }
            print_header("Enclosed area");
            print_output(&[KeyValue::from_f64("Integral", area.total(), 4)], format)?;
        }
        OutputFormat::Json => {
            print_report(&AreaReport {
                crossings: rows,
                left: area.left,
                right: area.right,
                area: area.total(),
            })?;
        }
        OutputFormat::Csv => {
            let mut results = Vec::new();
            if args.points {
                results.extend(
                    rows.iter()
                        .map(|row| KeyValue::new(format!("{} point", row.curves), row.point.clone())),
                );
            }
            if args.iterations {
                results.extend(rows.iter().map(|row| {
                    KeyValue::new(format!("{} iterations", row.curves), row.iterations.to_string())
                }));
            }
            results.push(KeyValue::from_f64("Integral", area.total(), 4));
            print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.4}", area.total());
        }
    }

    Ok(())
}
