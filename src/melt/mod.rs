//! Wide-to-long melting
//!
//! Turns selected columns of a table into (key, value) rows. Every remaining
//! column is repeated on each output row, so a source row with M melt columns
//! becomes exactly M rows.
//!
//! Validation happens up front in [`MeltPlan`]: an empty selection or a
//! column outside the header aborts before any row is produced.

pub mod plan;
pub mod melter;

pub use plan::MeltPlan;
pub use melter::{melt, melt_table, Melted, Melter};
