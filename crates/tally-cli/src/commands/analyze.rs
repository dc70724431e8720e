//! Analyze command - normalize a file and print the full statistics report.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tally::{AnalysisResult, ColumnKind, Tally};

use super::{ensure_exists, fmt_num};

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    ensure_exists(&file)?;

    let tally = Tally::new();
    let result = tally.analyze(&file)?;

    if let Some(ref path) = output {
        let content = serde_json::to_string_pretty(&result)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_report(&result, verbose);

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn print_report(result: &AnalysisResult, verbose: bool) {
    let report = &result.report;

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        result.source.file.white()
    );
    println!(
        "{} rows ({} dropped as empty), {} columns",
        report.row_count.to_string().white().bold(),
        result.dropped_rows.to_string().yellow(),
        report.columns.len().to_string().white().bold()
    );

    if verbose {
        println!();
        println!("{}", "Source:".yellow().bold());
        println!("  format: {}", result.source.format);
        println!("  size:   {} bytes", result.source.size_bytes);
        println!("  hash:   {}", result.source.hash);
    }

    println!();
    println!("{}", "Columns:".yellow().bold());
    for (name, kind) in &report.columns {
        let label = match kind {
            ColumnKind::Numeric => "numeric".green(),
            ColumnKind::Categorical => "categorical".blue(),
            ColumnKind::Empty => "empty".dimmed(),
        };
        println!("  {:20} {}", name, label);
    }

    if !report.statistics.is_empty() {
        println!();
        println!("{}", "Statistics:".yellow().bold());
        println!(
            "  {:20} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "column", "count", "mean", "median", "min", "max", "std dev"
        );
        for (name, stats) in &report.statistics {
            println!(
                "  {:20} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
                name,
                stats.count,
                fmt_num(stats.mean),
                fmt_num(stats.median),
                fmt_num(stats.min),
                fmt_num(stats.max),
                fmt_num(stats.std_dev)
            );
        }
    }

    if !report.outliers.is_empty() {
        println!();
        println!("{}", "Outliers:".yellow().bold());
        for (name, values) in &report.outliers {
            let values: Vec<String> = values.iter().map(|v| fmt_num(*v)).collect();
            println!("  {:20} {}", name, values.join(", ").red());
        }
    }

    if !report.frequencies.is_empty() {
        println!();
        println!("{}", "Top values:".yellow().bold());
        for (name, entries) in &report.frequencies {
            let entries: Vec<String> = entries
                .iter()
                .map(|e| format!("{} ({})", e.value, e.count))
                .collect();
            println!("  {:20} {}", name, entries.join(", "));
        }
    }

    if !report.correlations.is_empty() {
        println!();
        println!("{}", "Correlations:".yellow().bold());
        for entry in &report.correlations {
            let coefficient = match entry.coefficient {
                Some(r) => format!("{:+.3}", r).white().bold(),
                None => "undefined".dimmed(),
            };
            println!("  {} ~ {}: {}", entry.x, entry.y, coefficient);
        }
    }
}
