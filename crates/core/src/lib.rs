//! Core types and configuration for the stock feed.
//!
//! This crate provides shared types used across all other crates:
//! - Quote types (raw records, validated quotes, day summaries)
//! - Configuration structures (trading window, input source)
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, SourceConfig, TradingWindow};
pub use error::{Error, Result};
pub use types::*;
