//! Column projection
//!
//! Picks an ordered subset of columns from every row. Indices a row does not
//! have are dropped for that row and reported, never treated as fatal.

use crate::types::{dedup_indices, resolve_index, ColumnIndex, Record};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A requested column that a row did not have
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDiagnostic {
    /// 1-based position of the row in the input
    pub row: usize,

    /// The requested column
    pub index: ColumnIndex,

    /// Number of cells the row actually has
    pub width: usize,
}

impl fmt::Display for ColumnDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} has no column {} (row has {} columns)",
            self.row, self.index, self.width
        )
    }
}

/// Projected rows plus everything that had to be dropped
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub records: Vec<Record>,
    pub diagnostics: Vec<ColumnDiagnostic>,
}

/// Projects rows onto a fixed, deduplicated list of columns
pub struct ColumnSelector {
    indices: Vec<ColumnIndex>,
}

impl ColumnSelector {
    pub fn new(indices: &[ColumnIndex]) -> Self {
        ColumnSelector {
            indices: dedup_indices(indices),
        }
    }

    /// Project one row. `row_number` is only used for diagnostics.
    ///
    /// Returns `None` for a blank row, which yields neither output nor diagnostics.
    pub fn select_row(
        &self,
        row_number: usize,
        row: &[String],
        diagnostics: &mut Vec<ColumnDiagnostic>,
    ) -> Option<Record> {
        if row.is_empty() {
            return None;
        }

        let mut out = Vec::with_capacity(self.indices.len());
        for &idx in &self.indices {
            match resolve_index(idx, row.len()) {
                Some(i) => out.push(row[i].clone()),
                None => diagnostics.push(ColumnDiagnostic {
                    row: row_number,
                    index: idx,
                    width: row.len(),
                }),
            }
        }
        Some(out)
    }

    /// Project a whole table
    pub fn select(&self, records: &[Record]) -> Selection {
        let mut selection = Selection::default();

        for (i, row) in records.iter().enumerate() {
            if let Some(out) = self.select_row(i + 1, row, &mut selection.diagnostics) {
                selection.records.push(out);
            }
        }

        debug!(
            rows = selection.records.len(),
            dropped = selection.diagnostics.len(),
            "projected table"
        );
        selection
    }
}

/// Project `records` onto `indices`
pub fn select(records: &[Record], indices: &[ColumnIndex]) -> Selection {
    ColumnSelector::new(indices).select(records)
}
