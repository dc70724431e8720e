//! Grouped sums of a numeric column.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::{Record, Value, ValueKey};

/// Total of a numeric column within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub group: Value,
    pub total: f64,
    /// Number of values that contributed to `total`.
    pub count: usize,
}

/// Sum `value_column` per distinct value of `group_column`.
///
/// Groups appear in first-encountered order. Records without a group value
/// are skipped; values that do not coerce to numbers contribute nothing.
pub fn aggregate(records: &[Record], group_column: &str, value_column: &str) -> Vec<GroupTotal> {
    let mut groups: IndexMap<ValueKey, GroupTotal> = IndexMap::new();

    for record in records {
        let Some(group) = record.get(group_column).filter(|g| !g.is_blank()) else {
            continue;
        };

        let entry = groups.entry(group.key()).or_insert_with(|| GroupTotal {
            group: group.clone(),
            total: 0.0,
            count: 0,
        });

        if let Some(n) = record.number(value_column) {
            entry.total += n;
            entry.count += 1;
        }
    }

    groups.into_values().collect()
}
