//! Data source abstraction and metadata.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{RawRecord, RawValue};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, json, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was read.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been read.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Tokenized delimited data: a header plus rows of text cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column headers, unique except for blanks. Repeats get a numeric suffix.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order). Rows may be shorter than the
    /// header.
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl RawTable {
    /// Create a new raw table. A repeated header becomes `name_1`, `name_2`
    /// and so on, skipping names already in use.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers: dedupe_headers(headers),
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// Convert each row into a raw record keyed by header.
    ///
    /// Missing trailing cells are omitted and extra cells are ignored.
    pub fn to_raw_records(&self) -> Vec<RawRecord> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, cell)| (header.clone(), RawValue::Text(cell.clone())))
                    .collect()
            })
            .collect()
    }
}

fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = headers.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut suffix: HashMap<String, usize> = HashMap::new();

    headers
        .into_iter()
        .map(|header| {
            if header.trim().is_empty() || seen.insert(header.clone()) {
                return header;
            }
            let n = suffix.entry(header.clone()).or_insert(0);
            loop {
                *n += 1;
                let candidate = format!("{}_{}", header, n);
                if taken.insert(candidate.clone()) {
                    seen.insert(candidate.clone());
                    return candidate;
                }
            }
        })
        .collect()
}
