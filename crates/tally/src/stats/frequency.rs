//! Categorical frequency tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{Record, Value, ValueKey};

/// Occurrence count of one distinct value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: Value,
    pub count: usize,
}

/// Count distinct non-empty values of `column`.
///
/// Sorted by descending count; ties keep the order in which values were
/// first encountered. Numbers and text are never grouped together. A column
/// absent from every record yields an empty table.
pub fn frequency(records: &[Record], column: &str) -> Vec<FrequencyEntry> {
    let mut counts: IndexMap<ValueKey, FrequencyEntry> = IndexMap::new();

    for value in records.iter().filter_map(|r| r.get(column)) {
        if value.is_blank() {
            continue;
        }
        counts
            .entry(value.key())
            .or_insert_with(|| FrequencyEntry {
                value: value.clone(),
                count: 0,
            })
            .count += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts.into_values().collect();
    // Stable sort keeps first-encountered order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{RawValue, normalize, raw_record};

    fn departments(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .map(|d| Record::new().with("department", *d))
            .collect()
    }

    #[test]
    fn test_frequency_distribution() {
        let records = departments(&[
            "Engineering", "Marketing", "Engineering", "Marketing", "Sales",
            "Engineering", "Sales", "Engineering", "Marketing", "Sales",
        ]);

        let freq = frequency(&records, "department");
        assert_eq!(
            freq,
            vec![
                FrequencyEntry { value: Value::from("Engineering"), count: 4 },
                FrequencyEntry { value: Value::from("Marketing"), count: 3 },
                FrequencyEntry { value: Value::from("Sales"), count: 3 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let records = departments(&["b", "a", "c", "a", "b", "c"]);
        let values: Vec<String> = frequency(&records, "department")
            .into_iter()
            .map(|e| e.value.to_string())
            .collect();
        assert_eq!(values, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_and_null_values_excluded() {
        let raw = vec![
            raw_record([("department", RawValue::from("Engineering"))]),
            raw_record([("department", RawValue::from(""))]),
            raw_record([("department", RawValue::from("Marketing"))]),
            raw_record([("department", RawValue::Null)]),
            raw_record([("department", RawValue::from("Engineering"))]),
        ];
        let records = normalize(&raw);

        let freq = frequency(&records, "department");
        assert_eq!(
            freq,
            vec![
                FrequencyEntry { value: Value::from("Engineering"), count: 2 },
                FrequencyEntry { value: Value::from("Marketing"), count: 1 },
            ]
        );
        let total: usize = freq.iter().map(|e| e.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_number_and_text_not_grouped() {
        let records = vec![
            Record::new().with("code", 1),
            Record::new().with("code", "1.0x"),
            Record::new().with("code", 1.0),
            Record::new().with("code", true),
        ];
        let freq = frequency(&records, "code");
        assert_eq!(freq.len(), 3);
        assert_eq!(freq[0], FrequencyEntry { value: Value::Number(1.0), count: 2 });
    }

    #[test]
    fn test_unknown_column() {
        assert!(frequency(&departments(&["x"]), "nonExistentColumn").is_empty());
    }
}
