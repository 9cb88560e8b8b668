//! Termtable - render JSON records as a box-drawing table.
//!
//! Reads a JSON array of records from a file or stdin and prints the
//! rendered table to stdout. Logs go to stderr so the table stays pipeable.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use serde_json::Value;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use termtable_core::{
    ColumnSizing, HorizontalAlignment, TableOptions, VerticalAlignment, create_table,
};

/// Termtable
#[derive(Parser)]
#[command(name = "termtable")]
#[command(about = "Render a JSON array of records as a box-drawing table")]
#[command(version)]
struct Args {
    /// Input file containing a JSON array of records (stdin when omitted)
    input: Option<PathBuf>,

    /// Comma-separated record keys to show as columns (defaults to the
    /// keys of the first object record)
    #[arg(short, long, value_delimiter = ',')]
    keys: Vec<String>,

    /// Maximum table width in character columns
    #[arg(short = 'w', long, default_value_t = 80)]
    max_width: usize,

    /// Column sizing: stretch or even
    #[arg(long, default_value = "stretch")]
    sizing: ColumnSizing,

    /// Horizontal cell alignment: left, middle, or right
    #[arg(long, default_value = "middle")]
    align: HorizontalAlignment,

    /// Vertical cell alignment: top, middle, or bottom
    #[arg(long, default_value = "middle")]
    valign: VerticalAlignment,

    /// Grow columns until the table fills the maximum width
    #[arg(long)]
    full_width: bool,

    /// Prepend an (index) column numbering the records
    #[arg(long)]
    index: bool,

    /// Print a plain message instead of failing when the width limit
    /// cannot hold the column count
    #[arg(long)]
    message_if_too_small: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(&args.log_level);

    match run(&args) {
        Ok(table) => {
            println!("{table}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let records: Vec<Value> =
        serde_json::from_str(&raw).context("input is not a JSON array of records")?;

    let keys = if args.keys.is_empty() {
        default_keys(&records)
    } else {
        args.keys.clone()
    };
    if keys.is_empty() && !args.index {
        bail!("no columns to render; pass --keys or --index");
    }
    debug!(records = records.len(), columns = keys.len(), "rendering table");

    let options = TableOptions::default()
        .with_max_width(args.max_width)
        .with_column_sizing(args.sizing)
        .with_horizontal_alignment(args.align)
        .with_vertical_alignment(args.valign)
        .with_full_width(args.full_width)
        .with_index_column(args.index)
        .with_error_if_too_small(!args.message_if_too_small);

    Ok(create_table(&records, &keys, &options)?)
}

/// Column keys of the first object record, in sorted key order.
fn default_keys(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .find_map(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}
