//! tabshape-select: Project columns out of a delimited table
//!
//! Usage:
//!   # Keep columns 3 and 0, in that order, write to stdout
//!   tabshape-select data.csv 3 0
//!
//!   # Write to a file and keep a JSON report of missing columns
//!   tabshape-select data.csv 1 2 -o out.csv --report missing.jsonl
//!
//! Columns a row does not have are skipped for that row and reported as
//! warnings on stderr. The exit status stays zero.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabshape::{parse_delimiter, run_select, TableFormat};

#[derive(Parser, Debug)]
#[command(name = "tabshape-select")]
#[command(about = "Project a subset of columns from a delimited table", long_about = None)]
struct Args {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Zero-based column indices, in output order
    #[arg(value_name = "COLUMN", required = true, num_args = 1.., allow_negative_numbers = true)]
    columns: Vec<i64>,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Field delimiter (use "tab" for tab-separated input)
    #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Write skipped-column reports to this file as JSON lines
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    tabshape::logging::init();
    let args = Args::parse();

    let format = TableFormat {
        delimiter: args.delimiter,
    };

    let summary = run_select(
        &args.input,
        args.output.as_deref(),
        args.report.as_deref(),
        &format,
        &args.columns,
    )?;

    if let Some(output) = &args.output {
        eprintln!(
            "Wrote {} rows to {} ({} missing columns skipped)",
            summary.rows,
            output.display(),
            summary.warnings.len()
        );
    }

    Ok(())
}
