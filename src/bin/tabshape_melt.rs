//! tabshape-melt: Reshape columns of a table from wide to long format
//!
//! Usage:
//!   # Melt columns 2 and 3; other columns are repeated on every output row
//!   tabshape-melt wide.csv 2 3
//!
//!   # Custom key/value column names, output to a file
//!   tabshape-melt wide.csv 2 3 --key-name metric --value-name amount -o long.csv
//!
//! The first row is the header. Rows shorter than the header are padded with
//! empty cells, longer rows are cut to the header width. An empty or
//! out-of-range column list aborts before anything is written.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabshape::{parse_delimiter, run_melt, MeltConfig, TableFormat};

#[derive(Parser, Debug)]
#[command(name = "tabshape-melt")]
#[command(about = "Turn selected columns into key/value rows", long_about = None)]
struct Args {
    /// Input file; its first row is the header
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Zero-based indices of the columns to melt, in output order
    #[arg(value_name = "COLUMN", required = true, num_args = 1.., allow_negative_numbers = true)]
    columns: Vec<i64>,

    /// Output file (stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Field delimiter (use "tab" for tab-separated input)
    #[arg(long, short = 'd', default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Header name of the key column (default: "k")
    #[arg(long)]
    key_name: Option<String>,

    /// Header name of the value column (default: "v")
    #[arg(long)]
    value_name: Option<String>,
}

fn main() -> Result<()> {
    tabshape::logging::init();
    let args = Args::parse();

    let format = TableFormat {
        delimiter: args.delimiter,
    };

    let mut config = MeltConfig::default();
    if let Some(key) = args.key_name {
        config.key_column = key;
    }
    if let Some(value) = args.value_name {
        config.value_column = value;
    }

    let summary = run_melt(
        &args.input,
        args.output.as_deref(),
        &format,
        &args.columns,
        config,
    )?;

    if let Some(output) = &args.output {
        eprintln!("Wrote {} rows to {}", summary.rows, output.display());
    }

    Ok(())
}
