//! Statistics over normalized records.
//!
//! All operations are pure functions of their inputs: they never mutate the
//! records, keep no state between calls, and resolve degenerate inputs to
//! `None` or an empty result instead of an error.

mod aggregate;
mod correlation;
mod descriptive;
mod frequency;
mod outliers;
mod projection;

pub use aggregate::{GroupTotal, aggregate};
pub use correlation::{CorrelationEntry, correlate, correlation_matrix, pearson};
pub use descriptive::{ColumnStats, describe, describe_numeric, median, percentile};
pub use frequency::{FrequencyEntry, frequency};
pub use outliers::{Fences, IQR_MULTIPLIER, MIN_OUTLIER_SAMPLE, detect_outliers};
pub use projection::{numeric_values, paired_values, sorted_ascending};
