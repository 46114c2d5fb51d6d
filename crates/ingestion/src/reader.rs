//! Delimited quote record reading.
//!
//! Records carry the fixed columns `date,time,symbol,price` and are yielded
//! one at a time; nothing is buffered beyond the current record.

use std::fs::File;
use std::io::Read;

use feed_core::{Error, RawQuote, Result, SourceConfig};

/// Streaming reader of raw quote records.
pub struct QuoteReader<R> {
    inner: csv::Reader<R>,
    record: csv::StringRecord,
}

impl QuoteReader<File> {
    /// Open the file named by the source configuration.
    ///
    /// Fails with `Error::EmptySource` before touching the filesystem when no
    /// path is configured.
    pub fn open(source: &SourceConfig) -> Result<Self> {
        let path = source.require_path()?;
        let file = File::open(path)?;
        Self::from_reader(file, source)
    }
}

impl<R: Read> QuoteReader<R> {
    /// Wrap any reader using the delimiter, header and trim settings of `source`.
    pub fn from_reader(reader: R, source: &SourceConfig) -> Result<Self> {
        let trim = if source.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        let inner = csv::ReaderBuilder::new()
            .delimiter(source.delimiter_byte()?)
            .has_headers(source.has_headers)
            .flexible(true)
            .trim(trim)
            .from_reader(reader);

        Ok(Self {
            inner,
            record: csv::StringRecord::new(),
        })
    }

    /// Line number of the record most recently read.
    pub fn line(&self) -> u64 {
        self.record.position().map(|p| p.line()).unwrap_or(0)
    }
}

impl<R: Read> Iterator for QuoteReader<R> {
    type Item = Result<RawQuote>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.read_record(&mut self.record) {
            Ok(true) => Some(Ok(to_raw_quote(&self.record))),
            Ok(false) => None,
            Err(e) => Some(Err(Error::read(e.to_string()))),
        }
    }
}

fn to_raw_quote(record: &csv::StringRecord) -> RawQuote {
    let field = |i: usize| record.get(i).map(str::to_string);
    RawQuote {
        date: field(0),
        time: field(1),
        symbol: field(2),
        price: field(3),
    }
}
