//! CLI command implementations.

pub mod aggregate;
pub mod analyze;
pub mod correlate;
pub mod describe;
pub mod frequency;
pub mod insights;
pub mod outliers;

use std::path::Path;

use tally::{Dataset, Tally};

type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Fail early with a readable message when the input file does not exist.
pub(crate) fn ensure_exists(file: &Path) -> CommandResult<()> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }
    Ok(())
}

/// Load and normalize a file.
pub(crate) fn load_dataset(tally: &Tally, file: &Path) -> CommandResult<Dataset> {
    ensure_exists(file)?;
    Ok(tally.load(file)?)
}

/// Format a statistic for display.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported_once() {
        let missing = Path::new("/no/such/data.csv");

        let err = ensure_exists(missing).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /no/such/data.csv");

        let err = load_dataset(&Tally::new(), missing).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /no/such/data.csv");
    }

    #[test]
    fn test_existing_file_passes() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(ensure_exists(&manifest).is_ok());
    }
}
