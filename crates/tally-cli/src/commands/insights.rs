//! Insights command - plain-language summary of a data file.

use std::path::PathBuf;

use colored::Colorize;
use tally::{InsightSource, Tally};

use super::load_dataset;

pub fn run(file: PathBuf, offline: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tally = Tally::new();
    if !offline {
        tally = tally.with_env_summarizer();
    }

    let dataset = load_dataset(&tally, &file)?;

    if let Some(name) = tally.summarizer_name() {
        tracing::info!(provider = name, "remote summarizer configured");
        println!("{} {}", "Summarizing with".cyan().bold(), name.white());
    }

    let insight = tally.insights(&dataset);

    match &insight.source {
        InsightSource::Remote { provider } => {
            println!("{}", format!("Insights from {}:", provider).yellow().bold())
        }
        InsightSource::Fallback => println!("{}", "Insights (offline):".yellow().bold()),
    }
    println!();
    println!("{}", insight.text);

    Ok(())
}
