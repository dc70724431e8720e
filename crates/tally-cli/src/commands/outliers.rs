//! Outliers command - values outside the Tukey fences.

use std::path::PathBuf;

use colored::Colorize;
use tally::Tally;
use tally::stats::{Fences, MIN_OUTLIER_SAMPLE, detect_outliers, numeric_values, sorted_ascending};

use super::{fmt_num, load_dataset};

pub fn run(file: PathBuf, column: String) -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::new();
    let dataset = load_dataset(&tally, &file)?;

    let values = numeric_values(dataset.records(), &column);
    if values.len() < MIN_OUTLIER_SAMPLE {
        println!(
            "{}",
            format!(
                "Column '{}' has {} numeric values; at least {} are needed",
                column,
                values.len(),
                MIN_OUTLIER_SAMPLE
            )
            .yellow()
        );
        return Ok(());
    }

    if let Some(fences) = Fences::from_sorted(&sorted_ascending(&values)) {
        println!(
            "Fences for {}: [{}, {}]",
            column.cyan().bold(),
            fmt_num(fences.lower),
            fmt_num(fences.upper)
        );
    }

    let outliers = detect_outliers(dataset.records(), &column);
    if outliers.is_empty() {
        println!("{}", "No outliers found".green());
    } else {
        println!("Found {} outliers:", outliers.len().to_string().red().bold());
        for value in outliers {
            println!("  {}", fmt_num(value));
        }
    }

    Ok(())
}
