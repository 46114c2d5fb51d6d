//! Streaming driver for the stock feed.
//!
//! This crate provides:
//! - Lazy read → filter → aggregate pipeline over a delimited source
//! - Run counters (records read, quotes dropped, days emitted)
//! - Rendering of day summaries as a text report

pub mod pipeline;
pub mod report;

pub use pipeline::{DaySummaries, Pipeline, RunStats};
pub use report::ReportWriter;
