//! Correlate command - Pearson correlation of two columns.

use std::path::PathBuf;

use colored::Colorize;
use tally::{Tally, correlate};

use super::load_dataset;

pub fn run(file: PathBuf, x: String, y: String) -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::new();
    let dataset = load_dataset(&tally, &file)?;

    match correlate(dataset.records(), &x, &y) {
        Some(r) => println!("{} ~ {}: {}", x, y, format!("{:+.4}", r).white().bold()),
        None => println!(
            "{} ~ {}: {}",
            x,
            y,
            "undefined (fewer than two paired values or a constant column)".yellow()
        ),
    }

    Ok(())
}
