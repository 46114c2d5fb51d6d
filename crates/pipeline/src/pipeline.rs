//! Read → filter → aggregate, one record at a time.

use std::fs::File;
use std::io::{Read, Write};

use feed_core::{Config, DaySummary, Result, SourceConfig};
use feed_ingestion::{Normalized, QuoteParser, QuoteReader};
use feed_stats::DailyAggregator;
use tracing::{error, info};

use crate::report::ReportWriter;

/// Counters for one pass over a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Records read from the source.
    pub records_read: u64,
    /// Records inside the trading window.
    pub quotes_accepted: u64,
    /// Records outside the trading window.
    pub quotes_dropped: u64,
    /// Day summaries emitted.
    pub days_emitted: u64,
}

/// Pipeline configured with a trading window and an input source.
#[derive(Debug, Clone)]
pub struct Pipeline {
    parser: QuoteParser,
    source: SourceConfig,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            parser: QuoteParser::new(config.window),
            source: config.source.clone(),
        }
    }

    /// Open the configured file and stream its day summaries.
    ///
    /// Fails with `Error::EmptySource` when no path is configured.
    pub fn open(&self) -> Result<DaySummaries<File>> {
        let records = QuoteReader::open(&self.source)?;
        Ok(DaySummaries::new(records, self.parser))
    }

    /// Stream day summaries from any reader.
    pub fn summaries<R: Read>(&self, reader: R) -> Result<DaySummaries<R>> {
        let records = QuoteReader::from_reader(reader, &self.source)?;
        Ok(DaySummaries::new(records, self.parser))
    }

    /// Render every summary of `reader` to `out`.
    ///
    /// Summaries completed before an error have already been written when
    /// the error is returned.
    pub fn run<R: Read, W: Write>(&self, reader: R, out: W) -> Result<RunStats> {
        let summaries = self.summaries(reader)?;
        render(summaries, out)
    }

    /// Render every summary of the configured file to `out`.
    pub fn run_file<W: Write>(&self, out: W) -> Result<RunStats> {
        let summaries = self.open()?;
        render(summaries, out)
    }
}

fn render<R: Read, W: Write>(mut summaries: DaySummaries<R>, out: W) -> Result<RunStats> {
    let mut report = ReportWriter::new(out);
    for summary in summaries.by_ref() {
        report.write_summary(&summary?)?;
    }
    report.finish()?;
    Ok(summaries.stats())
}

/// Lazy iterator of day summaries over a record source.
///
/// Stops after the first error; the day open at that point is never
/// summarized.
pub struct DaySummaries<R> {
    records: QuoteReader<R>,
    parser: QuoteParser,
    aggregator: DailyAggregator,
    stats: RunStats,
    done: bool,
}

impl<R: Read> DaySummaries<R> {
    fn new(records: QuoteReader<R>, parser: QuoteParser) -> Self {
        Self {
            records,
            parser,
            aggregator: DailyAggregator::new(),
            stats: RunStats::default(),
            done: false,
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> RunStats {
        RunStats {
            days_emitted: self.aggregator.days_emitted() as u64,
            ..self.stats
        }
    }

    /// Line number of the record most recently read.
    pub fn line(&self) -> u64 {
        self.records.line()
    }

    fn fail(&mut self, e: feed_core::Error) -> Option<Result<DaySummary>> {
        self.done = true;
        error!(line = self.line(), error = %e, "stopping at bad record");
        Some(Err(e))
    }
}

impl<R: Read> Iterator for DaySummaries<R> {
    type Item = Result<DaySummary>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let raw = match self.records.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.done = true;
                    let last = self.aggregator.finish();
                    let stats = self.stats();
                    info!(
                        records = stats.records_read,
                        accepted = stats.quotes_accepted,
                        dropped = stats.quotes_dropped,
                        days = stats.days_emitted,
                        "end of input"
                    );
                    return last.map(Ok);
                }
            };
            self.stats.records_read += 1;

            match self.parser.normalize(raw) {
                Ok(Normalized::Accepted(quote)) => {
                    self.stats.quotes_accepted += 1;
                    if let Some(summary) = self.aggregator.push(quote) {
                        return Some(Ok(summary));
                    }
                }
                Ok(Normalized::Dropped) => self.stats.quotes_dropped += 1,
                Err(e) => return self.fail(e),
            }
        }
    }
}
