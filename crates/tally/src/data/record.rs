//! A single normalized row.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::value::Value;

/// One row of typed, named field values.
///
/// Absent fields are simply not present; a record never stores empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, skipping blank values.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field. Blank values (empty text, NaN) remove the key instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if value.is_blank() {
            self.fields.shift_remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a field and coerce it to a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_number)
    }

    /// Check whether a field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Goes through `insert` so blank values never land in the map.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(fields.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
