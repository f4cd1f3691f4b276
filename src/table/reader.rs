use crate::config::TableFormat;
use crate::error::{ReshapeError, Result};
use crate::types::Record;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn reader_builder(format: &TableFormat) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(format.delimiter);
    builder
}

/// Index just past the line terminator at `i`, or `i` if there is none
fn skip_terminator(content: &[u8], i: usize) -> usize {
    match content.get(i) {
        Some(b'\r') if content.get(i + 1) == Some(&b'\n') => i + 2,
        Some(b'\r') | Some(b'\n') => i + 1,
        _ => i,
    }
}

/// Count the empty lines starting at byte `start`, the reader's offset after
/// the previous record.
fn blank_lines_at(content: &[u8], start: usize) -> usize {
    let mut i = start;

    // The previous record's terminator may still be unconsumed.
    match start.checked_sub(1).and_then(|prev| content.get(prev)) {
        None | Some(b'\n') => {}
        Some(b'\r') => {
            if content.get(i) == Some(&b'\n') {
                i += 1;
            }
        }
        Some(_) => i = skip_terminator(content, i),
    }

    let mut lines = 0;
    loop {
        let next = skip_terminator(content, i);
        if next == i {
            return lines;
        }
        lines += 1;
        i = next;
    }
}

/// Read every record from `reader`. Rows may differ in length.
///
/// Blank lines come back as empty records, so row positions match line
/// positions for single-line rows. A leading UTF-8 byte-order mark is
/// stripped for every table, not only for INSERT input.
pub fn read_records<R: Read>(mut reader: R, format: &TableFormat) -> Result<Vec<Record>> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let content = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw[..]);

    let mut csv_reader = reader_builder(format).from_reader(content);
    let mut row = csv::StringRecord::new();
    let mut records = Vec::new();

    loop {
        let start = csv_reader.position().byte() as usize;
        let blanks = blank_lines_at(content, start);
        records.extend(std::iter::repeat_with(Record::new).take(blanks));

        if !csv_reader.read_record(&mut row)? {
            break;
        }
        records.push(row.iter().map(str::to_string).collect());
    }

    Ok(records)
}

/// Read a whole table from disk.
///
/// # Errors
/// [`ReshapeError::FileNotFound`] if `path` does not exist; nothing is read in that case.
pub fn read_table<P: AsRef<Path>>(path: P, format: &TableFormat) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReshapeError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let records = read_records(BufReader::new(file), format)?;
    debug!(path = %path.display(), rows = records.len(), "read table");
    Ok(records)
}
