//! Integral command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use crossing_math::functions::Curve;
use crossing_math::interval::Interval;
use crossing_math::quadrature::integrate_with_grid;

use crate::cli::OutputFormat;
use crate::commands::pair_label;
use crate::output::{print_header, print_output, print_report, KeyValue};
use crate::settings::Settings;

/// Arguments for the integral command.
#[derive(Args, Debug)]
pub struct IntegralArgs {
    /// Curve on top (see `crossing curves`)
    pub f: Curve,

    /// Curve subtracted from `f`
    pub g: Curve,

    /// One end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub from: f64,

    /// Other end of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub to: f64,

    /// Precision of the midpoint rule
    #[arg(short = 'e', long, env = "CROSSING_INTEGRAL_PRECISION")]
    pub precision: Option<f64>,
}

/// Integral result.
#[derive(Debug, Serialize)]
pub struct IntegralReport {
    pub curves: String,
    pub from: f64,
    pub to: f64,
    pub segments: i64,
    pub integral: f64,
}

/// Execute the integral command.
pub fn execute(args: IntegralArgs, settings: Settings, format: OutputFormat) -> Result<()> {
    let settings = settings.with_overrides(None, args.precision, None)?;
    let interval = Interval::ordered(args.from, args.to);
    let precision = settings.integral_precision;

    info!("integrating {} over {}", pair_label(args.f, args.g), interval);
    let result = integrate_with_grid(&args.f, &args.g, interval.lo(), interval.hi(), precision)?;

    let report = IntegralReport {
        curves: pair_label(args.f, args.g),
        from: interval.lo(),
        to: interval.hi(),
        segments: result.segments,
        integral: result.integral,
    };

    match format {
        OutputFormat::Json => print_report(&report)?,
        OutputFormat::Minimal => println!("{:.5}", report.integral),
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new("Curves", report.curves.clone()),
                KeyValue::new("Interval", interval.to_string()),
                KeyValue::new("Segments", report.segments.to_string()),
                KeyValue::from_f64("Integral", report.integral, 5),
            ];
            if format == OutputFormat::Table {
                print_header("Integral");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}
