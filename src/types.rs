use std::collections::HashSet;

/// One row of a table: an ordered sequence of string cells
pub type Record = Vec<String>;

/// A requested column position. Signed so that negative requests from the
/// command line can be reported as out of range instead of rejected by the parser.
pub type ColumnIndex = i64;

/// Remove repeated indices, keeping the first occurrence of each.
///
/// Order is significant: it defines the output column order.
pub fn dedup_indices(indices: &[ColumnIndex]) -> Vec<ColumnIndex> {
    let mut seen = HashSet::with_capacity(indices.len());
    let mut ordered = Vec::with_capacity(indices.len());

    for &idx in indices {
        if seen.insert(idx) {
            ordered.push(idx);
        }
    }

    ordered
}

/// Resolve `idx` against a row of `width` cells
pub fn resolve_index(idx: ColumnIndex, width: usize) -> Option<usize> {
    usize::try_from(idx).ok().filter(|&i| i < width)
}

/// Build a record from string slices
pub fn record<S: AsRef<str>>(cells: &[S]) -> Record {
    cells.iter().map(|c| c.as_ref().to_string()).collect()
}
