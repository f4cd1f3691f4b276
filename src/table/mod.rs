//! Reading and writing delimited tables
//!
//! Thin layer over the `csv` crate. Records are plain `Vec<String>` so the
//! transforms never see the reader's types.

pub mod reader;
pub mod writer;

pub use reader::{read_records, read_table};
pub use writer::{open_output, LineSink, RecordSink};
