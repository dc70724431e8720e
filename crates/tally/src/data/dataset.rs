//! An in-memory batch of records with declared columns.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::record::Record;

/// Classification of a column over the full dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// At least one record yields a coercible number.
    Numeric,
    /// Values are present but none coerce to a number.
    Categorical,
    /// No record carries a value for this column.
    Empty,
}

/// Records plus an ordered, duplicate-free list of column names.
///
/// Column kinds are computed once at construction and never change: the
/// dataset is immutable after it is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
    kinds: IndexMap<String, ColumnKind>,
}

impl Dataset {
    /// Build a dataset from declared column names and records.
    ///
    /// Duplicate column names keep their first position.
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>, records: Vec<Record>) -> Self {
        let columns: IndexSet<String> = columns.into_iter().map(Into::into).collect();
        let columns: Vec<String> = columns.into_iter().collect();
        let kinds = classify(&columns, &records);

        Self {
            columns,
            records,
            kinds,
        }
    }

    /// Build a dataset whose columns are the union of record keys, in the
    /// order they are first encountered.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: IndexSet<String> = IndexSet::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.insert(key.to_string());
                }
            }
        }
        Self::new(columns, records)
    }

    /// Declared column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Classification of a declared column.
    pub fn kind(&self, column: &str) -> Option<ColumnKind> {
        self.kinds.get(column).copied()
    }

    /// Column kinds in declared order.
    pub fn kinds(&self) -> &IndexMap<String, ColumnKind> {
        &self.kinds
    }

    /// Columns classified as numeric, in declared order.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.columns_of_kind(ColumnKind::Numeric)
    }

    /// Columns classified as categorical, in declared order.
    pub fn categorical_columns(&self) -> Vec<&str> {
        self.columns_of_kind(ColumnKind::Categorical)
    }

    /// The first `n` records.
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    fn columns_of_kind(&self, kind: ColumnKind) -> Vec<&str> {
        self.kinds
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Classify each column in a single pass over the records.
fn classify(columns: &[String], records: &[Record]) -> IndexMap<String, ColumnKind> {
    columns
        .iter()
        .map(|column| {
            let mut present = false;
            let mut numeric = false;
            for value in records.iter().filter_map(|r| r.get(column)) {
                present = true;
                if value.as_number().is_some() {
                    numeric = true;
                    break;
                }
            }

            let kind = if numeric {
                ColumnKind::Numeric
            } else if present {
                ColumnKind::Categorical
            } else {
                ColumnKind::Empty
            };
            (column.clone(), kind)
        })
        .collect()
}
