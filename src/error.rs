//! Error types for the reshaping tools.
//!
//! Only fatal conditions live here. Out-of-range columns in a projection are
//! not errors; they come back as [`crate::select::ColumnDiagnostic`] values.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these aborts the operation before output is written.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// Input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// No melt columns were given.
    #[error("No columns selected to melt")]
    EmptyMeltSelection,

    /// A melt column lies outside the header.
    #[error("Column {index} is out of range (header has {width} columns)")]
    ColumnOutOfRange { index: i64, width: usize },

    /// The table has no header row.
    #[error("Input table is empty")]
    EmptyTable,

    /// Malformed delimited input.
    #[error("Invalid delimited input: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to serialize a diagnostics report.
    #[error("Failed to write report: {0}")]
    Report(#[from] serde_json::Error),

    /// Failed to read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReshapeError {
    /// True for errors caused by the caller's arguments or the table's shape,
    /// as opposed to a missing file or an I/O failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ReshapeError::EmptyMeltSelection
                | ReshapeError::ColumnOutOfRange { .. }
                | ReshapeError::EmptyTable
                | ReshapeError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReshapeError>;
