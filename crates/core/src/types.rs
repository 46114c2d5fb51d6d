//! Core data types for the stock feed.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};

/// One delimited record exactly as read, before validation.
///
/// A field is `None` when the record is too short to carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuote {
    /// ISO-8601 calendar date text.
    pub date: Option<String>,
    /// `HH:MM:SS` time-of-day text.
    pub time: Option<String>,
    /// Ticker symbol.
    pub symbol: Option<String>,
    /// Price text, never interpreted.
    pub price: Option<String>,
}

impl RawQuote {
    /// Build a raw quote with every field present.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        symbol: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            symbol: Some(symbol.into()),
            price: Some(price.into()),
        }
    }
}

/// A validated quote that falls inside the trading window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Trading day the quote belongs to.
    pub date: NaiveDate,
    /// Time of day of the quote.
    pub time: NaiveTime,
    /// Ticker symbol.
    pub symbol: String,
    /// Price text as received.
    pub price: String,
}

impl Quote {
    /// Hour of day (0-23) of the quote.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
}

/// Summary statistics for one trading day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    /// The day summarized.
    pub trading_day: NaiveDate,
    /// Number of in-window quotes seen for the day.
    pub valid_quote_count: usize,
    /// Time of the last quote of the day, in input order.
    pub last_quote_time: NaiveTime,
    /// Hour of day with the most quotes.
    pub busiest_hour: Option<u32>,
    /// Symbol with the most quotes.
    pub busiest_symbol: Option<String>,
}

/// Renders the five-line day report.
impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trading Day= {}", self.trading_day)?;
        writeln!(f, "Last Quote Time = {}", self.last_quote_time)?;
        writeln!(f, "Number of valid quotes = {}", self.valid_quote_count)?;
        match self.busiest_hour {
            Some(hour) => writeln!(f, "Most active hour = {}", hour)?,
            None => writeln!(f, "Most active hour = None")?,
        }
        match &self.busiest_symbol {
            Some(symbol) => write!(f, "Most active symbol = {}", symbol),
            None => write!(f, "Most active symbol = None"),
        }
    }
}
