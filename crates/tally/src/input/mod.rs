//! Input adapter: reads delimited and JSON files into raw records.
//!
//! This sits in front of the normalizer and does no type inference of its
//! own; every delimited cell is handed over as raw text.

mod parser;
mod source;

pub use parser::{DEFAULT_MAX_FILE_SIZE, LoadedRecords, Parser, ParserConfig};
pub use source::{RawTable, SourceMetadata};
