//! Command-line arguments for the stock feed.
//!
//! Flags override the matching values of the optional JSON configuration file.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::Parser;
use feed_core::{Config, TradingWindow};
use feed_ingestion::parse_time;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Quote file with one `date,time,symbol,price` record per line.
    pub input: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start of the trading window (inclusive).
    #[arg(long, value_name = "HH:MM:SS", value_parser = parse_time_arg)]
    pub start: Option<NaiveTime>,

    /// End of the trading window (inclusive).
    #[arg(long, value_name = "HH:MM:SS", value_parser = parse_time_arg)]
    pub end: Option<NaiveTime>,

    /// Field delimiter.
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Skip the first record as a header row (`--has-headers=false` to turn
    /// off a file setting).
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub has_headers: Option<bool>,

    /// Trim whitespace around every field (`--trim=false` to turn off a file
    /// setting).
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub trim: Option<bool>,
}

fn parse_time_arg(text: &str) -> Result<NaiveTime, String> {
    parse_time(text).map_err(|e| e.to_string())
}

impl Args {
    /// Merge the flags over `base` and validate the result.
    pub fn apply(self, mut base: Config) -> feed_core::Result<Config> {
        base.window = TradingWindow::new(
            self.start.unwrap_or(base.window.start),
            self.end.unwrap_or(base.window.end),
        )?;
        if let Some(input) = self.input {
            base.source.path = Some(input);
        }
        if let Some(delimiter) = self.delimiter {
            base.source.delimiter = delimiter;
        }
        if let Some(has_headers) = self.has_headers {
            base.source.has_headers = has_headers;
        }
        if let Some(trim) = self.trim {
            base.source.trim = trim;
        }

        base.validate()?;
        Ok(base)
    }

    /// Load the configuration file if one was given, then apply the flags.
    pub fn into_config(self) -> feed_core::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        self.apply(base)
    }
}
