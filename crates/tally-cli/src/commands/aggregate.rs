//! Aggregate command - per-group sums.

use std::path::PathBuf;

use colored::Colorize;
use tally::{Tally, aggregate};

use super::{fmt_num, load_dataset};

pub fn run(file: PathBuf, group: String, value: String) -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::new();
    let dataset = load_dataset(&tally, &file)?;

    let totals = aggregate(dataset.records(), &group, &value);
    if totals.is_empty() {
        println!("{}", format!("Column '{}' has no values", group).yellow());
        return Ok(());
    }

    let grand_total: f64 = totals.iter().map(|t| t.total).sum();

    println!("{} by {}", value.cyan().bold(), group.cyan().bold());
    for entry in &totals {
        let share = if grand_total != 0.0 {
            format!("{:5.1}%", entry.total / grand_total * 100.0)
        } else {
            "    -".to_string()
        };
        println!(
            "  {:30} {:>14} {}",
            entry.group.to_string(),
            fmt_num(entry.total),
            share.dimmed()
        );
    }
    println!("  {} {:>14}", format!("{:30}", "total").bold(), fmt_num(grand_total));

    Ok(())
}
