use crate::config::TableFormat;
use crate::error::Result;
use crate::types::Record;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Open `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(std::fs::File::create(p)?)),
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}

/// Writes records as delimited rows. Rows may have different lengths.
pub struct RecordSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RecordSink<W> {
    pub fn new(writer: W, format: &TableFormat) -> Self {
        let writer = csv::WriterBuilder::new()
            .flexible(true)
            .delimiter(format.delimiter)
            .from_writer(writer);
        RecordSink { writer }
    }

    pub fn write_record(&mut self, record: &[String]) -> Result<()> {
        self.writer.write_record(record)?;
        Ok(())
    }

    pub fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes plain text lines
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W) -> Self {
        LineSink { writer }
    }

    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line.as_ref())?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
