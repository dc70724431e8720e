//! Fuzz target for normalization and the statistics that follow it.
//!
//! Arbitrary JSON documents are normalized; when they are accepted, every
//! column of the result is run through the statistics operations.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::normalize::normalize_json;
use tally::{Dataset, correlate, describe, detect_outliers, frequency};

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(records) = normalize_json(&document) else {
        return;
    };

    let dataset = Dataset::from_records(records);
    let columns = dataset.columns().to_vec();
    let records = dataset.records();

    let _ = describe(records, &columns);
    for column in &columns {
        let _ = detect_outliers(records, column);
        let _ = frequency(records, column);
    }
    if let [x, y, ..] = columns.as_slice() {
        if let Some(r) = correlate(records, x, y) {
            assert!((-1.0..=1.0).contains(&r));
        }
    }
});
