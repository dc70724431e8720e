//! Describe command - descriptive statistics per numeric column.

use std::path::PathBuf;

use colored::Colorize;
use tally::{ColumnStats, Tally, describe};
use tally::stats::describe_numeric;

use super::{fmt_num, load_dataset};

pub fn run(file: PathBuf, columns: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let tally = Tally::new();
    let dataset = load_dataset(&tally, &file)?;

    let stats: Vec<(String, Option<ColumnStats>)> = if columns.is_empty() {
        describe_numeric(&dataset)
            .into_iter()
            .map(|(name, stats)| (name, Some(stats)))
            .collect()
    } else {
        describe(dataset.records(), columns.as_slice()).into_iter().collect()
    };

    if stats.is_empty() {
        println!("{}", "No numeric columns found".yellow());
        return Ok(());
    }

    for (name, stats) in stats {
        println!("{}", name.cyan().bold());
        match stats {
            Some(s) => {
                println!("  count:   {}", s.count);
                println!("  mean:    {}", fmt_num(s.mean));
                println!("  median:  {}", fmt_num(s.median));
                println!("  min:     {}", fmt_num(s.min));
                println!("  max:     {}", fmt_num(s.max));
                println!("  range:   {}", fmt_num(s.range));
                println!("  std dev: {}", fmt_num(s.std_dev));
            }
            None => println!("  {}", "no numeric values".dimmed()),
        }
    }

    Ok(())
}
