//! Fuzz target for the file reader.
//!
//! This fuzzer tests that loading a file:
//! 1. Never panics on malformed delimited or JSON input
//! 2. Handles all delimiter combinations
//! 3. Always yields a report the statistics layer can consume

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tally::Tally;

fuzz_target!(|input: (bool, &[u8])| {
    let (as_json, data) = input;

    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let suffix = if as_json { ".json" } else { ".csv" };
    if let Ok(mut temp_file) = tempfile::NamedTempFile::with_suffix(suffix) {
        if temp_file.write_all(data).is_ok() {
            let _ = Tally::new().analyze(temp_file.path());
        }
    }
});
