//! # Tabshape - Tabular Reshaping Toolkit
//!
//! Small, deterministic transforms over delimited tables whose rows are plain
//! sequences of string cells.
//!
//! ## Modules
//!
//! - **select**: project an ordered subset of columns, reporting columns a row lacks
//! - **melt**: reshape selected columns from wide to long (key/value) format
//! - **insert**: turn rows into SQL `INSERT` statements
//! - **table**: read and write delimited records
//!
//! ## Quick Start
//!
//! ### Projection
//!
//! ```rust
//! use tabshape::{record, select};
//!
//! let rows = vec![record(&["a", "b", "c"]), record(&["1", "2"])];
//! let selection = select(&rows, &[2, 0]);
//!
//! assert_eq!(selection.records[0], record(&["c", "a"]));
//! assert_eq!(selection.records[1], record(&["1"]));
//! assert_eq!(
//!     selection.diagnostics[0].to_string(),
//!     "row 2 has no column 2 (row has 2 columns)"
//! );
//! ```
//!
//! ### Melting
//!
//! ```rust
//! use tabshape::{melt, record};
//!
//! # fn main() -> tabshape::Result<()> {
//! let header = record(&["a", "b", "c", "d"]);
//! let melted = melt(&header, &[record(&["1", "2", "3", "4"])], &[2, 3])?;
//!
//! assert_eq!(melted.header, record(&["a", "b", "k", "v"]));
//! assert_eq!(melted.records[1], record(&["1", "2", "d", "4"]));
//! # Ok(())
//! # }
//! ```
//!
//! ### INSERT statements
//!
//! ```rust
//! use tabshape::{record, synthesize};
//!
//! let sql = synthesize(&[record(&["x", "y'z"])], "t", Some("2025-11-30"));
//! assert_eq!(sql[0], "INSERT INTO t VALUES (DEFAULT, 'x', 'y''z', '2025-11-30');");
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod insert;
pub mod logging;
pub mod melt;
pub mod run;
pub mod select;
pub mod table;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{InsertConfig, MeltConfig, TableFormat};
pub use error::{ReshapeError, Result};
pub use escape::{escape, escape_display, escape_with_limit, MAX_LITERAL_CHARS};
pub use insert::{synthesize, InsertSynthesizer};
pub use melt::{melt, melt_table, Melted, Melter, MeltPlan};
pub use run::{run_insert, run_melt, run_select, RunSummary};
pub use select::{select, ColumnDiagnostic, ColumnSelector, Selection};
pub use table::{open_output, read_records, read_table, LineSink, RecordSink};
pub use types::{dedup_indices, record, ColumnIndex, Record};

/// Parse a single-character delimiter argument into the byte the reader expects
pub fn parse_delimiter(arg: &str) -> std::result::Result<u8, String> {
    match arg {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let bytes = arg.as_bytes();
            if bytes.len() == 1 {
                Ok(bytes[0])
            } else {
                Err(format!("delimiter must be a single ASCII character, got '{}'", arg))
            }
        }
    }
}
