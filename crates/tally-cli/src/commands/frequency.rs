//! Frequency command - distinct value counts.

use std::path::PathBuf;

use colored::Colorize;
use tally::{Tally, frequency};

use super::load_dataset;

pub fn run(
    file: PathBuf,
    column: String,
    top: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::new();
    let dataset = load_dataset(&tally, &file)?;

    let mut entries = frequency(dataset.records(), &column);
    if entries.is_empty() {
        println!("{}", format!("Column '{}' has no values", column).yellow());
        return Ok(());
    }

    let distinct = entries.len();
    if let Some(n) = top {
        entries.truncate(n);
    }

    println!(
        "{} ({} distinct values)",
        column.cyan().bold(),
        distinct.to_string().white().bold()
    );
    for entry in entries {
        println!("  {:30} {}", entry.value.to_string(), entry.count);
    }

    Ok(())
}
