//! Univariate outlier detection with Tukey fences.

use serde::{Deserialize, Serialize};

use crate::data::Record;

use super::descriptive::percentile;
use super::projection::{numeric_values, sorted_ascending};

/// Smallest sample for which quartiles are estimated.
pub const MIN_OUTLIER_SAMPLE: usize = 4;

/// Standard Tukey multiplier.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Quartiles and the fences derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    /// First quartile (25th percentile).
    pub q1: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fences {
    /// Fences for values sorted ascending, or `None` below the minimum sample.
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        if sorted.len() < MIN_OUTLIER_SAMPLE {
            return None;
        }
        let q1 = percentile(sorted, 25.0)?;
        let q3 = percentile(sorted, 75.0)?;
        let iqr = q3 - q1;

        Some(Self {
            q1,
            q3,
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        })
    }

    /// Calculate the interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Check whether a value falls outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Values of `column` outside the Tukey fences, in record order.
///
/// Fewer than four coercible values yield an empty result.
pub fn detect_outliers(records: &[Record], column: &str) -> Vec<f64> {
    let values = numeric_values(records, column);
    let Some(fences) = Fences::from_sorted(&sorted_ascending(&values)) else {
        return Vec::new();
    };

    values.into_iter().filter(|&v| fences.is_outlier(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[f64]) -> Vec<Record> {
        values.iter().map(|&v| Record::new().with("value", v)).collect()
    }

    #[test]
    fn test_detects_outliers_in_encounter_order() {
        let records = column(&[10.0, 12.0, 11.0, 13.0, 10.0, 50.0, 9.0, 100.0]);
        assert_eq!(detect_outliers(&records, "value"), vec![50.0, 100.0]);
    }

    #[test]
    fn test_order_is_not_sorted() {
        let records = column(&[100.0, 10.0, 12.0, 11.0, 13.0, 10.0, 9.0, 50.0]);
        assert_eq!(detect_outliers(&records, "value"), vec![100.0, 50.0]);
    }

    #[test]
    fn test_no_outliers() {
        let records = column(&[10.0, 12.0, 11.0, 13.0, 10.0, 9.0]);
        assert!(detect_outliers(&records, "value").is_empty());
    }

    #[test]
    fn test_insufficient_sample() {
        let records = column(&[10.0, 12.0, 1000.0]);
        assert!(detect_outliers(&records, "value").is_empty());
        assert!(detect_outliers(&records, "missing").is_empty());
    }

    #[test]
    fn test_low_outlier() {
        let records = column(&[-500.0, 10.0, 11.0, 12.0, 13.0]);
        assert_eq!(detect_outliers(&records, "value"), vec![-500.0]);
    }

    #[test]
    fn test_fences() {
        let sorted = [9.0, 10.0, 10.0, 11.0, 12.0, 13.0, 50.0, 100.0];
        let fences = Fences::from_sorted(&sorted).unwrap();
        assert_eq!(fences.q1, 10.0);
        assert_eq!(fences.q3, 22.25);
        assert_eq!(fences.iqr(), 12.25);
        assert!(fences.is_outlier(41.0));
        assert!(!fences.is_outlier(40.0));
    }
}
