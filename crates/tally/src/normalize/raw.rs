//! Untyped records as handed over by a tokenizer.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{Result, TallyError};

/// A raw field value, either already typed by the tokenizer or plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Unprocessed text.
    Text(String),
    /// A number typed upstream.
    Number(f64),
    /// A boolean typed upstream.
    Boolean(bool),
    /// An explicit null / unset value.
    Null,
}

impl RawValue {
    /// Convert a JSON scalar. Arrays and objects degrade to their compact
    /// JSON text.
    pub fn from_json(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => RawValue::Null,
            JsonValue::Bool(b) => RawValue::Boolean(*b),
            JsonValue::Number(n) => n
                .as_f64()
                .map(RawValue::Number)
                .unwrap_or_else(|| RawValue::Text(n.to_string())),
            JsonValue::String(s) => RawValue::Text(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => RawValue::Text(value.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}

/// A raw row: field name to raw value, in source order.
pub type RawRecord = IndexMap<String, RawValue>;

/// Build a raw record from `(key, value)` pairs.
pub fn raw_record<K, V, I>(fields: I) -> RawRecord
where
    K: Into<String>,
    V: Into<RawValue>,
    I: IntoIterator<Item = (K, V)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Convert a JSON document into raw records.
///
/// The document must be an array whose every element is an object; anything
/// else is a malformed-input error.
pub fn raw_records_from_json(document: &JsonValue) -> Result<Vec<RawRecord>> {
    let JsonValue::Array(items) = document else {
        return Err(TallyError::MalformedInput(format!(
            "expected an array of records, found {}",
            json_kind(document)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            JsonValue::Object(fields) => Ok(fields
                .iter()
                .map(|(k, v)| (k.clone(), RawValue::from_json(v)))
                .collect()),
            other => Err(TallyError::MalformedInput(format!(
                "record {} is {}, expected an object",
                index,
                json_kind(other)
            ))),
        })
        .collect()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
