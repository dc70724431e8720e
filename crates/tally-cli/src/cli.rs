//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally: normalize tabular data and report descriptive statistics
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a data file and print the full statistics report
    Analyze {
        /// Path to the data file (CSV/TSV/JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Describe numeric columns (all of them unless columns are given)
    Describe {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to describe (repeatable)
        #[arg(short, long = "column", value_name = "COLUMN")]
        columns: Vec<String>,
    },

    /// Pearson correlation between two columns
    Correlate {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// First column
        #[arg(value_name = "X")]
        x: String,

        /// Second column
        #[arg(value_name = "Y")]
        y: String,
    },

    /// List values outside the Tukey fences of a column
    Outliers {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to inspect
        #[arg(value_name = "COLUMN")]
        column: String,
    },

    /// Count distinct values of a column
    Frequency {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to count
        #[arg(value_name = "COLUMN")]
        column: String,

        /// Show only the most frequent N values
        #[arg(long)]
        top: Option<usize>,
    },

    /// Sum a numeric column per group
    Aggregate {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to group by
        #[arg(value_name = "GROUP")]
        group: String,

        /// Numeric column to sum
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Generate plain-language insights for a data file
    Insights {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Skip the remote summarizer even if an API key is set
        #[arg(long)]
        offline: bool,
    },
}
