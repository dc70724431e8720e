//! Error types for the Tally library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tally operations.
///
/// Statistics operations never produce these: degenerate results are
/// expressed as `None` or empty collections. Errors only arise at the
/// boundaries (reading input, malformed raw records, the summarizer).
#[derive(Debug, Error)]
pub enum TallyError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raw input is not a sequence of field mappings.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Input file exceeds the configured size limit.
    #[error("File too large: {size} bytes exceeds the limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote summarizer failed.
    #[error("Summarizer error: {0}")]
    Summarizer(String),

    /// The remote model is still loading.
    #[error("Summarizer unavailable (model loading, estimated {estimated_time:.0}s)")]
    SummarizerUnavailable { estimated_time: f64 },
}

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
