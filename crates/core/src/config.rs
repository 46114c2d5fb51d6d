//! Configuration structures for the stock feed.

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration for a feed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trading window used to filter quotes.
    pub window: TradingWindow,
    /// Input source configuration.
    pub source: SourceConfig,
}

impl Config {
    /// Parse and validate a configuration from JSON text.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.source.delimiter_byte()?;
        Ok(())
    }
}

/// Inclusive time-of-day range during which a quote is considered valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingWindow {
    /// First valid time of day (inclusive).
    pub start: NaiveTime,
    /// Last valid time of day (inclusive).
    pub end: NaiveTime,
}

impl TradingWindow {
    /// Create a window, rejecting a start that falls after the end.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Check that `start <= end`.
    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(Error::config(format!(
                "trading window start {} is after end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Whether `time` lies within the window, bounds included.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl Default for TradingWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(16, 30, 0).unwrap_or_default(),
        }
    }
}

/// Delimited input source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path of the quote file.
    pub path: Option<PathBuf>,
    /// Field delimiter (single ASCII character).
    pub delimiter: char,
    /// Whether the first record is a header row to skip.
    pub has_headers: bool,
    /// Trim surrounding whitespace from every field.
    pub trim: bool,
}

impl SourceConfig {
    /// The configured path, or `Error::EmptySource` when none was given.
    pub fn require_path(&self) -> Result<&Path> {
        match self.path.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => Ok(path),
            _ => Err(Error::EmptySource),
        }
    }

    /// The delimiter as the single byte the reader expects.
    ///
    /// Line terminators and the quote character frame records, so they cannot
    /// separate fields.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter {
            '\n' | '\r' | '"' => Err(Error::config(format!(
                "delimiter {:?} conflicts with record framing",
                self.delimiter
            ))),
            c if c.is_ascii() => Ok(c as u8),
            c => Err(Error::config(format!(
                "delimiter {:?} is not a single ASCII character",
                c
            ))),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: ',',
            has_headers: false,
            trim: false,
        }
    }
}
