//! Pearson correlation between numeric columns.

use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Record};

use super::projection::paired_values;

/// Correlation between two columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub x: String,
    pub y: String,
    /// `None` when the correlation is undefined for this pair.
    pub coefficient: Option<f64>,
}

/// Pearson product-moment correlation of two columns.
///
/// Only records where both columns coerce to numbers are paired. Returns
/// `None` with fewer than two pairs or when either column has zero variance.
pub fn correlate(records: &[Record], column_x: &str, column_y: &str) -> Option<f64> {
    pearson(&paired_values(records, column_x, column_y))
}

/// Pearson correlation over paired samples.
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }

    // Constant columns have zero variance even when the mean is inexact.
    let (x0, y0) = pairs[0];
    if pairs.iter().all(|&(x, _)| x == x0) || pairs.iter().all(|&(_, y)| y == y0) {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|&(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|&(_, y)| y).sum::<f64>() / n;

    // Deviations are scaled to [-1, 1] so squaring cannot overflow or underflow.
    let scale_x = pairs.iter().map(|&(x, _)| (x - mean_x).abs()).fold(0.0, f64::max);
    let scale_y = pairs.iter().map(|&(_, y)| (y - mean_y).abs()).fold(0.0, f64::max);
    if scale_x == 0.0 || scale_y == 0.0 || !scale_x.is_finite() || !scale_y.is_finite() {
        return None;
    }

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for &(x, y) in pairs {
        let dx = (x - mean_x) / scale_x;
        let dy = (y - mean_y) / scale_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denominator = sum_xx.sqrt() * sum_yy.sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    Some((sum_xy / denominator).clamp(-1.0, 1.0))
}

/// Correlate every unordered pair of numeric columns, in declared order.
pub fn correlation_matrix(dataset: &Dataset) -> Vec<CorrelationEntry> {
    let numeric = dataset.numeric_columns();
    let mut entries = Vec::new();

    for (i, x) in numeric.iter().enumerate() {
        for y in &numeric[i + 1..] {
            entries.push(CorrelationEntry {
                x: x.to_string(),
                y: y.to_string(),
                coefficient: correlate(dataset.records(), x, y),
            });
        }
    }

    entries
}
