//! Record ingestion and normalization for the stock feed.
//!
//! This crate handles:
//! - Reading delimited quote records
//! - Strict date/time parsing
//! - Trading window filtering

pub mod parser;
pub mod reader;

pub use parser::{Normalized, QuoteParser, parse_date, parse_time};
pub use reader::QuoteReader;
