//! Numeric projection of a column.
//!
//! Every numeric operation goes through these helpers, so the skip policy is
//! the same everywhere: values that do not coerce to a number (including
//! absent fields) are excluded, never treated as zero.

use crate::data::Record;

/// Coercible numeric values of `column`, in record order.
pub fn numeric_values(records: &[Record], column: &str) -> Vec<f64> {
    records.iter().filter_map(|r| r.number(column)).collect()
}

/// `(x, y)` pairs from records where both columns coerce to numbers.
pub fn paired_values(records: &[Record], column_x: &str, column_y: &str) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| Some((r.number(column_x)?, r.number(column_y)?)))
        .collect()
}

/// Copy and sort values ascending.
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new().with("x", 1).with("y", 10),
            Record::new().with("x", "2").with("y", "n/a"),
            Record::new().with("y", 30),
            Record::new().with("x", true).with("y", 40),
            Record::new().with("x", 5).with("y", 50),
        ]
    }

    #[test]
    fn test_numeric_values_skip_non_coercible() {
        assert_eq!(numeric_values(&records(), "x"), vec![1.0, 2.0, 5.0]);
        assert_eq!(numeric_values(&records(), "y"), vec![10.0, 30.0, 40.0, 50.0]);
        assert!(numeric_values(&records(), "z").is_empty());
    }

    #[test]
    fn test_paired_values_require_both() {
        assert_eq!(
            paired_values(&records(), "x", "y"),
            vec![(1.0, 10.0), (5.0, 50.0)]
        );
    }

    #[test]
    fn test_sorted_ascending() {
        assert_eq!(sorted_ascending(&[3.0, -1.0, 2.0, 2.0]), vec![-1.0, 2.0, 2.0, 3.0]);
    }
}
