//! Crossing CLI - curve intersections and enclosed areas.
//!
//! # Usage
//!
//! ```bash
//! # Area enclosed by the three fixed curves, with points and iteration counts
//! crossing area -p -n
//!
//! # Crossing of two catalog curves inside a bracket
//! crossing root linear exponential --from 1 --to 2 -e 1e-6
//!
//! # Signed area between two curves
//! crossing integral sine zero --from 0 --to 3.14159 -e 1e-5
//!
//! # List the catalog
//! crossing curves
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    // Settings file first, then the global format flag on top
    let settings = Settings::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(settings.format);

    // Execute command
    match cli.command {
        Commands::Area(args) => commands::area::execute(args, settings, format)?,
        Commands::Root(args) => commands::root::execute(args, settings, format)?,
        Commands::Integral(args) => commands::integral::execute(args, settings, format)?,
        Commands::Curves(args) => commands::curves::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout only carries results.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
