//! Tally: normalization and descriptive statistics for tabular records.
//!
//! Raw rows from a spreadsheet or JSON export are coerced into typed records,
//! then summarized column by column. Statistics never fail: degenerate input
//! (too few values, constant columns, missing fields) yields `None` or an
//! empty result.
//!
//! # Pipeline
//!
//! - **input**: read delimited or JSON files into raw records
//! - **normalize**: trim, coerce numbers and booleans, drop empty fields
//! - **stats**: describe, correlate, detect outliers, count frequencies
//! - **summary**: optional natural-language insights
//!
//! # Example
//!
//! ```no_run
//! use tally::Tally;
//!
//! let tally = Tally::new();
//! let result = tally.analyze("sales.csv").unwrap();
//!
//! println!("Rows: {}", result.report.row_count);
//! for (column, stats) in &result.report.statistics {
//!     println!("{}: mean {:.2}", column, stats.mean);
//! }
//! ```

pub mod data;
pub mod error;
pub mod input;
pub mod normalize;
pub mod stats;
pub mod summary;

mod tally;

pub use crate::tally::{
    AnalysisResult, DatasetReport, Insight, InsightSource, Tally, TallyConfig, dataset_from_raw,
};
pub use data::{ColumnKind, Dataset, Record, Value};
pub use error::{Result, TallyError};
pub use input::{Parser, ParserConfig, SourceMetadata};
pub use normalize::{RawRecord, RawValue, normalize};
pub use stats::{
    ColumnStats, CorrelationEntry, FrequencyEntry, GroupTotal, aggregate, correlate, describe,
    detect_outliers, frequency, percentile,
};
