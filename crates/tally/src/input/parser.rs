//! CSV/TSV/JSON reader with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, TallyError};
use crate::normalize::{RawRecord, raw_records_from_json};
use super::source::{RawTable, SourceMetadata};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Default upper bound on input size (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Files larger than this are rejected.
    pub max_file_size: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Raw records read from a file, with the declared column order.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    /// Column names in source order.
    pub columns: Vec<String>,
    /// One raw record per data row.
    pub records: Vec<RawRecord>,
    /// Metadata about the file.
    pub source: SourceMetadata,
}

/// Reads tabular data files into raw records.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read a delimited or JSON file into raw records.
    ///
    /// Files with a `.json` extension must hold an array of objects; anything
    /// else is parsed as delimited text.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedRecords> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if !is_json {
            let (table, source) = self.parse_file(path)?;
            return Ok(LoadedRecords {
                columns: table.headers.clone(),
                records: table.to_raw_records(),
                source,
            });
        }

        let contents = self.read(path)?;
        let document: serde_json::Value = serde_json::from_slice(&contents)?;
        let mut records = raw_records_from_json(&document)?;
        if let Some(max) = self.config.max_rows {
            records.truncate(max);
        }

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash_bytes(&contents),
            contents.len() as u64,
            "json".to_string(),
            records.len(),
            columns.len(),
        );

        Ok(LoadedRecords {
            columns,
            records,
            source,
        })
    }

    /// Parse a delimited file and return the raw table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(RawTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = self.read(path)?;

        // Detect delimiter if not specified
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash_bytes(&contents),
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        tracing::debug!(
            file = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed delimited file"
        );

        Ok((table, source))
    }

    /// Read the whole file, enforcing the size limit.
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let io_err = |source| TallyError::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = fs::metadata(path).map_err(io_err)?.len();
        if size > self.config.max_file_size {
            return Err(TallyError::FileTooLarge {
                size,
                limit: self.config.max_file_size,
            });
        }

        fs::read(path).map_err(io_err)
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| row_idx >= max) {
                break;
            }
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            // Generate column names from the widest row
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(TallyError::EmptyData("No columns found".to_string()));
        }

        if rows.is_empty() {
            return Err(TallyError::EmptyData("No data rows found".to_string()));
        }

        Ok(RawTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TallyError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a slight bonus
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
