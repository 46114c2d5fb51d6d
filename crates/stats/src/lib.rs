//! Per-day statistics for the stock feed.
//!
//! This crate handles:
//! - Insertion-ordered occurrence tallies
//! - Day-boundary grouping of an ordered quote stream
//! - Day summary computation (count, last time, busiest hour and symbol)

pub mod daily;
pub mod tally;

pub use daily::DailyAggregator;
pub use tally::Tally;
