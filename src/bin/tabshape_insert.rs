//! tabshape-insert: Convert delimited rows into SQL INSERT statements
//!
//! Usage:
//!   # One statement per row, printed to stdout
//!   tabshape-insert rows.csv my_table
//!
//!   # Append a partition date to every row and write to a file
//!   tabshape-insert rows.csv my_table 2025-11-30 -o inserts.sql
//!
//! Each statement starts with DEFAULT for an auto-generated key column
//! unless --no-surrogate-key is given. Blank lines produce no statement.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabshape::{parse_delimiter, run_insert, InsertConfig, InsertSynthesizer, TableFormat};

#[derive(Parser, Debug)]
#[command(name = "tabshape-insert")]
#[command(about = "Generate INSERT statements from a delimited table", long_about = None)]
struct Args {
    /// Input file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Target table name, written as given
    #[arg(value_name = "TABLE")]
    table: String,

    /// Value appended to every row, e.g. a partition date
    #[arg(value_name = "PARTITION")]
    partition: Option<String>,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Field delimiter (use "tab" for tab-separated input)
    #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Don't emit the leading DEFAULT for a surrogate key column
    #[arg(long)]
    no_surrogate_key: bool,

    /// Characters kept from each value before quoting (default: 255)
    #[arg(long)]
    max_length: Option<usize>,
}

fn main() -> Result<()> {
    tabshape::logging::init();
    let args = Args::parse();

    let format = TableFormat {
        delimiter: args.delimiter,
    };

    let mut config = InsertConfig::default();
    if args.no_surrogate_key {
        config.surrogate_key = None;
    }
    if let Some(max) = args.max_length {
        config.max_literal_chars = max;
    }

    let synthesizer = InsertSynthesizer::new(args.table, args.partition, config);
    let summary = run_insert(&args.input, args.output.as_deref(), &format, &synthesizer)?;

    if let Some(output) = &args.output {
        eprintln!("Wrote {} statements to {}", summary.rows, output.display());
    }

    Ok(())
}
