//! Curves command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crossing_math::functions::Curve;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the curves command.
#[derive(Args, Debug)]
pub struct CurvesArgs {}

/// One catalog entry.
#[derive(Debug, Serialize, Tabled)]
pub struct CurveRow {
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "f(x)")]
    pub formula: &'static str,
    #[tabled(rename = "f'(x)")]
    pub derivative: &'static str,
}

/// Execute the curves command.
pub fn execute(_args: CurvesArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<CurveRow> = Curve::ALL
        .into_iter()
        .map(|curve| CurveRow {
            name: curve.name(),
            formula: curve.formula(),
            derivative: curve.derivative_formula(),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Curves");
    }
    print_output(&rows, format)
}
