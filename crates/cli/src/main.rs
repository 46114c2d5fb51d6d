//! Stock feed: prints per-day summaries of a quote file.
//!
//! Reads `date,time,symbol,price` records, drops quotes outside the trading
//! window, and writes one report per trading day to stdout. Logs go to stderr
//! and are controlled with `RUST_LOG`.
//!
//! ```bash
//! stock-feed quotes.csv --start 09:30:00 --end 16:30:00
//! ```

mod args;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use feed_pipeline::Pipeline;

const DEFAULT_LOG_FILTER: &str = "warn,stock_feed=info,feed_pipeline=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Args::parse().into_config().context("invalid configuration")?;
    let path = config.source.require_path()?.display().to_string();
    info!(
        %path,
        start = %config.window.start,
        end = %config.window.end,
        "processing quotes"
    );

    let pipeline = Pipeline::new(&config);
    let stdout = io::stdout();
    let stats = pipeline
        .run_file(BufWriter::new(stdout.lock()))
        .with_context(|| format!("failed to process {}", path))?;

    info!(
        records = stats.records_read,
        dropped = stats.quotes_dropped,
        days = stats.days_emitted,
        "done"
    );
    Ok(())
}
