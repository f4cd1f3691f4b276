//! File-to-file runs behind the command-line tools
//!
//! Each run reads the whole input and transforms it before the output is
//! opened. A missing input or an invalid melt selection therefore never
//! creates or truncates the output file.

use crate::config::{MeltConfig, TableFormat};
use crate::error::Result;
use crate::insert::InsertSynthesizer;
use crate::melt::melt_table;
use crate::select::{select, ColumnDiagnostic};
use crate::table::{open_output, read_table, LineSink, RecordSink};
use crate::types::ColumnIndex;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Rows or statements written, header excluded
    pub rows: usize,

    /// Columns dropped during projection; the run still succeeded
    pub warnings: Vec<ColumnDiagnostic>,
}

/// Project `indices` out of `input`.
///
/// Missing columns are logged and returned, not treated as errors. When
/// `report` is given they are also written there as JSON lines, after the
/// main output.
pub fn run_select(
    input: &Path,
    output: Option<&Path>,
    report: Option<&Path>,
    format: &TableFormat,
    indices: &[ColumnIndex],
) -> Result<RunSummary> {
    let records = read_table(input, format)?;
    let selection = select(&records, indices);

    for diag in &selection.diagnostics {
        warn!("{}", diag);
    }

    let mut sink = RecordSink::new(open_output(output)?, format);
    sink.write_records(&selection.records)?;
    sink.flush()?;

    if let Some(report_path) = report {
        let mut out = open_output(Some(report_path))?;
        for diag in &selection.diagnostics {
            writeln!(out, "{}", serde_json::to_string(diag)?)?;
        }
        out.flush()?;
    }

    Ok(RunSummary {
        rows: selection.records.len(),
        warnings: selection.diagnostics,
    })
}

/// Melt `indices` of `input`, whose first row is the header
pub fn run_melt(
    input: &Path,
    output: Option<&Path>,
    format: &TableFormat,
    indices: &[ColumnIndex],
    config: MeltConfig,
) -> Result<RunSummary> {
    let table = read_table(input, format)?;
    let melted = melt_table(&table, indices, config)?;

    let mut sink = RecordSink::new(open_output(output)?, format);
    sink.write_record(&melted.header)?;
    sink.write_records(&melted.records)?;
    sink.flush()?;

    Ok(RunSummary {
        rows: melted.records.len(),
        ..RunSummary::default()
    })
}

/// Write one INSERT statement per non-blank row of `input`
pub fn run_insert(
    input: &Path,
    output: Option<&Path>,
    format: &TableFormat,
    synthesizer: &InsertSynthesizer,
) -> Result<RunSummary> {
    let records = read_table(input, format)?;
    let statements = synthesizer.synthesize(&records);

    let mut sink = LineSink::new(open_output(output)?);
    sink.write_lines(&statements)?;
    sink.flush()?;

    Ok(RunSummary {
        rows: statements.len(),
        ..RunSummary::default()
    })
}

