//! Main Tally struct and public API.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{ColumnKind, Dataset};
use crate::error::Result;
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::normalize::{RawRecord, normalize};
use crate::stats::{
    ColumnStats, CorrelationEntry, FrequencyEntry, correlation_matrix, describe_numeric,
    detect_outliers, frequency,
};
use crate::summary::{
    HuggingFaceSummarizer, LocalSummarizer, Summarizer, SummarizerConfig, SummaryRequest,
};

/// Configuration for Tally analysis.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Summarizer configuration.
    pub summarizer: SummarizerConfig,
    /// Frequency entries kept per categorical column in a report.
    pub top_values: usize,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            summarizer: SummarizerConfig::default(),
            top_values: 10,
        }
    }
}

/// Statistics computed over one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Records that survived normalization.
    pub row_count: usize,
    /// Declared columns with their classification.
    pub columns: IndexMap<String, ColumnKind>,
    /// Descriptive statistics for numeric columns.
    pub statistics: IndexMap<String, ColumnStats>,
    /// Outlying values per numeric column; columns without outliers are omitted.
    pub outliers: IndexMap<String, Vec<f64>>,
    /// Most frequent values per categorical column.
    pub frequencies: IndexMap<String, Vec<FrequencyEntry>>,
    /// Correlation between each pair of numeric columns.
    pub correlations: Vec<CorrelationEntry>,
}

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Rows read from the file.
    pub raw_rows: usize,
    /// Rows removed because nothing in them survived normalization.
    pub dropped_rows: usize,
    /// Statistics over the cleaned dataset.
    pub report: DatasetReport,
}

/// Where an insight text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightSource {
    /// Produced by a remote summarizer.
    Remote { provider: String },
    /// Produced offline by the local summarizer.
    Fallback,
}

/// Natural-language summary of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

impl Insight {
    /// True when the text did not come from a remote summarizer.
    pub fn is_fallback(&self) -> bool {
        self.source == InsightSource::Fallback
    }
}

/// The main Tally analysis engine.
pub struct Tally {
    config: TallyConfig,
    parser: Parser,
    summarizer: Option<Arc<dyn Summarizer>>,
    fallback: LocalSummarizer,
}

impl Tally {
    /// Create a new Tally instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(TallyConfig::default())
    }

    /// Create a Tally instance with custom configuration.
    pub fn with_config(config: TallyConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());

        Self {
            config,
            parser,
            summarizer: None,
            fallback: LocalSummarizer::new(),
        }
    }

    /// Use a remote summarizer for insights.
    pub fn with_summarizer(mut self, summarizer: impl Summarizer + 'static) -> Self {
        self.summarizer = Some(Arc::new(summarizer));
        self
    }

    /// Attach the Hugging Face summarizer when an API key is set in the
    /// environment. Without a key, insights come from the local summarizer.
    pub fn with_env_summarizer(self) -> Self {
        match HuggingFaceSummarizer::from_env() {
            Ok(summarizer) => self.with_summarizer(summarizer),
            Err(e) => {
                tracing::debug!(error = %e, "no remote summarizer configured");
                self
            }
        }
    }

    /// Name of the remote summarizer, if one is attached.
    pub fn summarizer_name(&self) -> Option<&str> {
        self.summarizer.as_deref().map(|s| s.name())
    }

    /// Read and normalize a file into a dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let loaded = self.parser.load(path)?;
        Ok(dataset_from_raw(&loaded.columns, &loaded.records))
    }

    /// Analyze a data file.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let loaded = self.parser.load(path)?;
        let dataset = dataset_from_raw(&loaded.columns, &loaded.records);

        tracing::info!(
            file = %path.display(),
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "analyzing dataset"
        );

        Ok(AnalysisResult {
            source: loaded.source,
            raw_rows: loaded.records.len(),
            dropped_rows: loaded.records.len() - dataset.len(),
            report: self.report(&dataset),
        })
    }

    /// Analyze records that are already in memory.
    ///
    /// Columns are the union of the normalized record keys.
    pub fn analyze_records(&self, raw: &[RawRecord]) -> DatasetReport {
        let dataset = Dataset::from_records(normalize(raw));
        self.report(&dataset)
    }

    /// Compute the full statistics report for a dataset.
    pub fn report(&self, dataset: &Dataset) -> DatasetReport {
        let records = dataset.records();

        let outliers = dataset
            .numeric_columns()
            .into_iter()
            .map(|column| (column.to_string(), detect_outliers(records, column)))
            .filter(|(_, values)| !values.is_empty())
            .collect();

        let frequencies = dataset
            .categorical_columns()
            .into_iter()
            .map(|column| {
                let mut entries = frequency(records, column);
                entries.truncate(self.config.top_values);
                (column.to_string(), entries)
            })
            .collect();

        DatasetReport {
            row_count: dataset.len(),
            columns: dataset.kinds().clone(),
            statistics: describe_numeric(dataset),
            outliers,
            frequencies,
            correlations: correlation_matrix(dataset),
        }
    }

    /// Summarize a sample of the dataset in plain language.
    ///
    /// The remote summarizer is tried first; any failure, or no remote
    /// summarizer at all, falls back to the local summary.
    pub fn insights(&self, dataset: &Dataset) -> Insight {
        let request = SummaryRequest::from_dataset(dataset, self.config.summarizer.sample_size);

        if let Some(summarizer) = &self.summarizer {
            match summarizer.summarize(&request) {
                Ok(text) => {
                    return Insight {
                        text,
                        source: InsightSource::Remote {
                            provider: summarizer.name().to_string(),
                        },
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        provider = summarizer.name(),
                        error = %e,
                        "remote summarizer failed, using local summary"
                    );
                }
            }
        }

        Insight {
            text: self.fallback.summary(&request.sample),
            source: InsightSource::Fallback,
        }
    }
}

impl Default for Tally {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a dataset from raw records and the column order they were read with.
///
/// Column names are trimmed the same way record keys are, so declared columns
/// line up with normalized fields.
pub fn dataset_from_raw(columns: &[String], raw: &[RawRecord]) -> Dataset {
    let columns = columns
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    Dataset::new(columns, normalize(raw))
}
