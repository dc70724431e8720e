//! Normalization of raw tokenized rows into typed records.

mod normalizer;
mod raw;

pub use normalizer::{normalize, normalize_json, normalize_record, normalize_value};
pub use raw::{RawRecord, RawValue, raw_record, raw_records_from_json};
