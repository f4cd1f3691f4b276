//! Column partition for the wide-to-long melt
//!
//! A plan is computed once from the header width and the melt columns, so
//! every data row is reshaped without re-validating the selection.

use crate::error::{ReshapeError, Result};
use crate::types::{dedup_indices, resolve_index, ColumnIndex};

/// Which header columns are carried through and which become key/value rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeltPlan {
    /// Columns copied unchanged into every output row, ascending
    pub keep: Vec<usize>,

    /// Columns turned into (key, value) rows, in the caller's order
    pub melt: Vec<usize>,

    /// Number of cells every row is normalised to
    pub width: usize,
}

impl MeltPlan {
    /// Validate `melt_indices` against a header of `header_len` columns.
    ///
    /// # Errors
    /// [`ReshapeError::EmptyMeltSelection`] when no column is given, and
    /// [`ReshapeError::ColumnOutOfRange`] for the first index outside the header.
    pub fn new(header_len: usize, melt_indices: &[ColumnIndex]) -> Result<Self> {
        let requested = dedup_indices(melt_indices);
        if requested.is_empty() {
            return Err(ReshapeError::EmptyMeltSelection);
        }

        let melt = requested
            .iter()
            .map(|&idx| {
                resolve_index(idx, header_len).ok_or(ReshapeError::ColumnOutOfRange {
                    index: idx,
                    width: header_len,
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let keep = (0..header_len).filter(|i| !melt.contains(i)).collect();

        Ok(MeltPlan {
            keep,
            melt,
            width: header_len,
        })
    }

    /// Pad a short row with empty cells or cut a long one to the header width.
    ///
    /// Extra cells are dropped silently.
    pub fn normalize<'a>(&self, row: &'a [String]) -> Vec<&'a str> {
        let mut cells: Vec<&str> = row.iter().take(self.width).map(String::as_str).collect();
        cells.resize(self.width, "");
        cells
    }
}
