//! Tally CLI - normalize tabular data and report statistics.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze { file, json, output } => {
            commands::analyze::run(file, json, output, cli.verbose)
        }

        Commands::Describe { file, columns } => commands::describe::run(file, columns),

        Commands::Correlate { file, x, y } => commands::correlate::run(file, x, y),

        Commands::Outliers { file, column } => commands::outliers::run(file, column),

        Commands::Frequency { file, column, top } => commands::frequency::run(file, column, top),

        Commands::Aggregate { file, group, value } => {
            commands::aggregate::run(file, group, value)
        }

        Commands::Insights { file, offline } => commands::insights::run(file, offline),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
