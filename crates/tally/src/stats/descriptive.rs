//! Descriptive statistics and percentiles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Record};

use super::projection::{numeric_values, sorted_ascending};

/// Statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStats {
    /// Number of coercible numeric values.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation (divisor `count`).
    pub std_dev: f64,
    /// `max - min`.
    pub range: f64,
}

impl ColumnStats {
    /// Compute statistics over values, or `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        let sorted = sorted_ascending(values);
        let min = sorted[0];
        let max = sorted[count - 1];

        Some(Self {
            count,
            mean,
            median: median(&sorted)?,
            min,
            max,
            std_dev: variance.sqrt(),
            range: max - min,
        })
    }
}

/// Describe each requested column.
///
/// A column with no coercible numeric values maps to `None` rather than to
/// zero-filled statistics. Output follows the requested order.
pub fn describe<S: AsRef<str>>(
    records: &[Record],
    columns: &[S],
) -> IndexMap<String, Option<ColumnStats>> {
    columns
        .iter()
        .map(|column| {
            let column = column.as_ref();
            let values = numeric_values(records, column);
            (column.to_string(), ColumnStats::from_values(&values))
        })
        .collect()
}

/// Describe every column the dataset classifies as numeric.
pub fn describe_numeric(dataset: &Dataset) -> IndexMap<String, ColumnStats> {
    describe(dataset.records(), &dataset.numeric_columns())
        .into_iter()
        .filter_map(|(column, stats)| Some((column, stats?)))
        .collect()
}

/// Percentile of values already sorted ascending, `p` in `[0, 100]`.
///
/// Linear interpolation between the order statistics around rank
/// `p / 100 * (n - 1)`. Returns `None` for empty input or `p` outside the
/// range. The input is not re-sorted.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Middle value of sorted input; the mean of the two middle values for an
/// even count.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<Record> {
        let rows = [
            ("John", 30, 50000, "Engineering"),
            ("Jane", 25, 60000, "Marketing"),
            ("Bob", 35, 55000, "Engineering"),
            ("Alice", 28, 70000, "Marketing"),
            ("Charlie", 40, 80000, "Sales"),
            ("Diana", 22, 45000, "Engineering"),
            ("Eve", 45, 90000, "Sales"),
            ("Frank", 33, 52000, "Engineering"),
            ("Grace", 29, 58000, "Marketing"),
            ("Henry", 50, 95000, "Sales"),
        ];
        rows.iter()
            .map(|(name, age, salary, dept)| {
                Record::new()
                    .with("name", *name)
                    .with("age", *age)
                    .with("salary", *salary)
                    .with("department", *dept)
            })
            .collect()
    }

    fn approx(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_describe_age_and_salary() {
        let stats = describe(&staff(), &["age", "salary"]);

        let age = stats["age"].as_ref().unwrap();
        assert_eq!(age.count, 10);
        assert!(approx(age.mean, 33.7, 1e-9));
        assert_eq!(age.median, 31.5);
        assert_eq!(age.min, 22.0);
        assert_eq!(age.max, 50.0);
        assert_eq!(age.range, 28.0);
        assert!(approx(age.std_dev, 8.4623, 1e-3));

        let salary = stats["salary"].as_ref().unwrap();
        assert_eq!(salary.count, 10);
        assert_eq!(salary.mean, 65500.0);
        assert_eq!(salary.median, 59000.0);
        assert_eq!(salary.min, 45000.0);
        assert_eq!(salary.max, 95000.0);
    }

    #[test]
    fn test_describe_non_numeric_and_unknown_columns() {
        let stats = describe(&staff(), &["name", "nope"]);
        assert_eq!(stats.len(), 2);
        assert!(stats["name"].is_none());
        assert!(stats["nope"].is_none());
    }

    #[test]
    fn test_describe_empty_records() {
        let stats = describe(&[], &["age"]);
        assert!(stats["age"].is_none());
    }

    #[test]
    fn test_describe_missing_values() {
        let records = vec![
            Record::new().with("age", 30).with("salary", 50000),
            Record::new().with("age", 25),
            Record::new().with("age", 35).with("salary", 55000),
            Record::new().with("salary", 70000),
        ];
        let stats = describe(&records, &["age", "salary"]);
        assert_eq!(stats["age"].as_ref().unwrap().count, 3);
        assert_eq!(stats["salary"].as_ref().unwrap().count, 3);
    }

    #[test]
    fn test_describe_numeric_skips_text_columns() {
        let dataset = Dataset::from_records(staff());
        let stats = describe_numeric(&dataset);
        assert_eq!(stats.keys().collect::<Vec<_>>(), vec!["age", "salary"]);

        let empty = describe_numeric(&Dataset::from_records(Vec::new()));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_single_value_stats() {
        let stats = ColumnStats::from_values(&[7.0]).unwrap();
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.range, 0.0);
    }

    #[test]
    fn test_percentile_interpolation() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(percentile(&values, 50.0), Some(5.5));
        assert_eq!(percentile(&values, 25.0), Some(3.25));
        assert_eq!(percentile(&values, 75.0), Some(7.75));
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 100.0), Some(10.0));
    }

    #[test]
    fn test_percentile_edge_cases() {
        assert_eq!(percentile(&[], 50.0), None);
        assert_eq!(percentile(&[4.0], 90.0), Some(4.0));
        assert_eq!(percentile(&[1.0, 2.0], -1.0), None);
        assert_eq!(percentile(&[1.0, 2.0], 101.0), None);
        assert_eq!(percentile(&[1.0, 2.0], f64::NAN), None);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_describe_is_idempotent() {
        let records = staff();
        assert_eq!(describe(&records, &["age"]), describe(&records, &["age"]));
    }
}
