//! Coercion of raw records into typed records.

use serde_json::Value as JsonValue;

use crate::data::{Record, Value, parse_decimal};
use crate::error::Result;

use super::raw::{RawRecord, RawValue, raw_records_from_json};

/// Normalize raw records into typed records.
///
/// Keys and text values are trimmed; text that is a full decimal literal
/// becomes a number, `true`/`false` in any case become booleans. Empty and
/// null values are dropped, and records left with no fields are removed.
/// Record order is preserved.
pub fn normalize(raw: &[RawRecord]) -> Vec<Record> {
    let records: Vec<Record> = raw
        .iter()
        .map(normalize_record)
        .filter(|record| !record.is_empty())
        .collect();

    tracing::debug!(
        input = raw.len(),
        kept = records.len(),
        dropped = raw.len() - records.len(),
        "normalized records"
    );

    records
}

/// Normalize a JSON document holding an array of objects.
pub fn normalize_json(document: &JsonValue) -> Result<Vec<Record>> {
    let raw = raw_records_from_json(document)?;
    Ok(normalize(&raw))
}

/// Normalize a single raw record.
pub fn normalize_record(raw: &RawRecord) -> Record {
    let mut record = Record::new();
    for (key, value) in raw {
        if let Some(value) = normalize_value(value) {
            // Keys that collide after trimming: the later field wins.
            record.insert(key.trim(), value);
        }
    }
    record
}

/// Coerce a single raw value, or `None` when it should be dropped.
pub fn normalize_value(raw: &RawValue) -> Option<Value> {
    match raw {
        RawValue::Null => None,
        RawValue::Number(n) if n.is_nan() => None,
        RawValue::Number(n) => Some(Value::Number(*n)),
        RawValue::Boolean(b) => Some(Value::Boolean(*b)),
        RawValue::Text(text) => coerce_text(text),
    }
}

fn coerce_text(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(n) = parse_decimal(trimmed) {
        return Some(Value::Number(n));
    }

    if trimmed.eq_ignore_ascii_case("true") {
        Some(Value::Boolean(true))
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(Value::Boolean(false))
    } else {
        Some(Value::Text(trimmed.to_string()))
    }
}
