//! Typed records and datasets produced by normalization.

mod dataset;
mod record;
mod value;

pub use dataset::{ColumnKind, Dataset};
pub use record::Record;
pub use value::{Value, parse_decimal};

pub(crate) use value::ValueKey;
