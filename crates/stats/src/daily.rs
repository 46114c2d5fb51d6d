//! Day-boundary grouping of an ordered quote stream.
//!
//! Quotes must arrive sorted by date, then time. A summary is emitted each time
//! the date changes and once more when the stream ends; only the open day is
//! held in memory.

use chrono::{NaiveDate, NaiveTime};
use feed_core::{DaySummary, Quote};
use tracing::{debug, warn};

use crate::tally::Tally;

/// A day that's currently being accumulated.
#[derive(Debug, Clone)]
struct DayInProgress {
    trading_day: NaiveDate,
    quote_count: usize,
    last_quote_time: Option<NaiveTime>,
    hours: Tally<u32>,
    symbols: Tally<String>,
}

impl DayInProgress {
    fn new(trading_day: NaiveDate) -> Self {
        Self {
            trading_day,
            quote_count: 0,
            last_quote_time: None,
            hours: Tally::new(),
            symbols: Tally::new(),
        }
    }

    fn add_quote(&mut self, quote: Quote) {
        self.quote_count += 1;
        self.last_quote_time = Some(quote.time);
        self.hours.add(quote.hour());
        self.symbols.add(quote.symbol);
    }

    fn into_summary(self) -> Option<DaySummary> {
        let last_quote_time = self.last_quote_time?;

        Some(DaySummary {
            trading_day: self.trading_day,
            valid_quote_count: self.quote_count,
            last_quote_time,
            busiest_hour: self.hours.most_frequent().copied(),
            busiest_symbol: self.symbols.most_frequent().cloned(),
        })
    }
}

/// Groups an ordered quote stream into per-day summaries.
///
/// Ordering is a precondition and is not checked: a date that comes back after
/// its day was closed opens a new, separate day.
#[derive(Debug, Default)]
pub struct DailyAggregator {
    /// The open day, if any quote has been seen since the last boundary.
    current: Option<DayInProgress>,
    /// Number of summaries emitted so far.
    days_emitted: usize,
}

impl DailyAggregator {
    /// Create an aggregator with no open day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next quote of the stream.
    ///
    /// Returns the summary of the previous day when `quote` crosses a day
    /// boundary.
    pub fn push(&mut self, quote: Quote) -> Option<DaySummary> {
        let completed = match self.current.take() {
            Some(day) if day.trading_day == quote.date => {
                self.current = Some(day);
                None
            }
            Some(day) => {
                if quote.date < day.trading_day {
                    warn!(
                        closed = %day.trading_day,
                        next = %quote.date,
                        "quote date moved backwards; input is not sorted by date"
                    );
                }
                debug!(from = %day.trading_day, to = %quote.date, "day boundary");
                self.close(day)
            }
            None => None,
        };

        self.current
            .get_or_insert_with(|| DayInProgress::new(quote.date))
            .add_quote(quote);

        completed
    }

    /// Close the open day at end of stream.
    ///
    /// Returns `None` when no quote was seen since the last boundary. The
    /// aggregator is empty afterwards and may be reused.
    pub fn finish(&mut self) -> Option<DaySummary> {
        let day = self.current.take()?;
        self.close(day)
    }

    /// Number of summaries emitted so far.
    pub fn days_emitted(&self) -> usize {
        self.days_emitted
    }

    fn close(&mut self, day: DayInProgress) -> Option<DaySummary> {
        let summary = day.into_summary()?;
        self.days_emitted += 1;
        Some(summary)
    }
}
