//! Quote validation and trading window filtering.
//!
//! Turns a [`RawQuote`] into a [`Quote`] when its time falls inside the
//! configured [`TradingWindow`], or reports it as dropped otherwise.

use chrono::{NaiveDate, NaiveTime, Timelike};
use feed_core::{Error, Quote, RawQuote, Result, TradingWindow};
use tracing::debug;

/// Outcome of normalizing one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The record is inside the trading window and well formed.
    Accepted(Quote),
    /// The record falls outside the trading window.
    Dropped,
}

/// Parse a strict `HH:MM:SS` time of day.
///
/// Seconds run from 00 to 59; a leap second (`:60`) is rejected.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    if !matches_layout(text, "dd:dd:dd") {
        return Err(Error::format(format!("time '{}' is not HH:MM:SS", text)));
    }
    let time = NaiveTime::parse_from_str(text, "%H:%M:%S")
        .map_err(|e| Error::format(format!("time '{}': {}", text, e)))?;
    // chrono represents a leap second as a nanosecond overflow.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(Error::format(format!("time '{}': seconds out of range", text)));
    }
    Ok(time)
}

/// Parse a strict ISO-8601 `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    if !matches_layout(text, "dddd-dd-dd") {
        return Err(Error::format(format!("date '{}' is not YYYY-MM-DD", text)));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| Error::format(format!("date '{}': {}", text, e)))
}

/// Check `text` against a layout where `d` stands for an ASCII digit and any
/// other byte must match literally.
fn matches_layout(text: &str, layout: &str) -> bool {
    text.len() == layout.len()
        && text.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'd' => c.is_ascii_digit(),
            _ => c == l,
        })
}

/// Validates raw records against a trading window.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteParser {
    window: TradingWindow,
}

impl QuoteParser {
    /// Create a parser for the given trading window.
    pub fn new(window: TradingWindow) -> Self {
        Self { window }
    }

    /// Whether the time text lies inside the trading window (bounds inclusive).
    ///
    /// An absent or empty time is a defect in the record, not an
    /// out-of-hours quote, and fails with `Error::MissingField`.
    pub fn is_in_trading_window(&self, time: Option<&str>) -> Result<bool> {
        let time = required_time(time)?;
        Ok(self.window.contains(time))
    }

    /// Validate one record.
    ///
    /// Out-of-window records are [`Normalized::Dropped`]; that is the normal
    /// filtering path and never an error. In-window records must carry a
    /// well-formed date.
    pub fn normalize(&self, raw: RawQuote) -> Result<Normalized> {
        let time = required_time(raw.time.as_deref())?;
        if !self.window.contains(time) {
            debug!(%time, symbol = raw.symbol.as_deref().unwrap_or(""), "dropping out-of-window quote");
            return Ok(Normalized::Dropped);
        }

        let date = match raw.date.as_deref() {
            Some(text) if !text.is_empty() => parse_date(text)?,
            _ => return Err(Error::missing_field("date")),
        };

        Ok(Normalized::Accepted(Quote {
            date,
            time,
            symbol: raw.symbol.unwrap_or_default(),
            price: raw.price.unwrap_or_default(),
        }))
    }
}

fn required_time(time: Option<&str>) -> Result<NaiveTime> {
    match time {
        Some(text) if !text.is_empty() => parse_time(text),
        _ => Err(Error::missing_field("time")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn make_raw(date: &str, time: &str, symbol: &str) -> RawQuote {
        RawQuote::new(date, time, symbol, "100.00")
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:31:00").unwrap(), hms(9, 31, 0));
        assert_eq!(parse_time("16:30:00").unwrap(), hms(16, 30, 0));
        assert_eq!(parse_time("00:00:00").unwrap(), hms(0, 0, 0));
    }

    #[test]
    fn test_parse_time_rejects_loose_formats() {
        for text in ["9:3", "9:31:00", "09:31", "09:31:00.5", "09-31-00", "25:00:00", "16:29:60", "23:59:60", "ab:cd:ef", ""] {
            assert!(
                matches!(parse_time(text), Err(Error::Format(_))),
                "expected format error for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_loose_formats() {
        for text in ["2024-1-2", "2024/01/02", "02-01-2024", "2024-02-30", "2024-01-02T10:00:00", ""] {
            assert!(
                matches!(parse_date(text), Err(Error::Format(_))),
                "expected format error for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_window_inclusive_bounds() {
        let parser = QuoteParser::default();
        assert!(parser.is_in_trading_window(Some("09:30:00")).unwrap());
        assert!(parser.is_in_trading_window(Some("16:30:00")).unwrap());
        assert!(!parser.is_in_trading_window(Some("09:29:59")).unwrap());
        assert!(!parser.is_in_trading_window(Some("16:30:01")).unwrap());
    }

    #[test]
    fn test_window_matches_contains_across_day() {
        let window = TradingWindow::default();
        let parser = QuoteParser::new(window);
        for secs in (0..86_400).step_by(59) {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
            let text = time.format("%H:%M:%S").to_string();
            let expected = window.start <= time && time <= window.end;
            assert_eq!(parser.is_in_trading_window(Some(&text)).unwrap(), expected);
        }
    }

    #[test]
    fn test_window_missing_time() {
        let parser = QuoteParser::default();
        assert!(matches!(
            parser.is_in_trading_window(None),
            Err(Error::MissingField(_))
        ));
        assert!(matches!(
            parser.is_in_trading_window(Some("")),
            Err(Error::MissingField(_))
        ));
    }

    #[test]
    fn test_custom_window() {
        let window = TradingWindow::new(hms(10, 0, 0), hms(11, 0, 0)).unwrap();
        let parser = QuoteParser::new(window);
        assert!(!parser.is_in_trading_window(Some("09:45:00")).unwrap());
        assert!(parser.is_in_trading_window(Some("10:00:00")).unwrap());
    }

    #[test]
    fn test_normalize_accepts_in_window() {
        let parser = QuoteParser::default();
        let Normalized::Accepted(quote) = parser
            .normalize(make_raw("2024-01-02", "09:31:00", "AAPL"))
            .unwrap()
        else {
            panic!("expected an accepted quote");
        };
        assert_eq!(quote.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(quote.time, hms(9, 31, 0));
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, "100.00");
    }

    #[test]
    fn test_normalize_drops_out_of_window() {
        let parser = QuoteParser::default();
        let result = parser.normalize(make_raw("2024-01-02", "09:00:00", "AAPL")).unwrap();
        assert_eq!(result, Normalized::Dropped);
    }

    #[test]
    fn test_normalize_drop_skips_date_validation() {
        let parser = QuoteParser::default();
        let result = parser.normalize(make_raw("not-a-date", "17:00:00", "AAPL")).unwrap();
        assert_eq!(result, Normalized::Dropped);
    }

    #[test]
    fn test_normalize_malformed_time() {
        let parser = QuoteParser::default();
        let result = parser.normalize(make_raw("2024-01-02", "9:3", "AAPL"));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_normalize_leap_second_in_window() {
        let parser = QuoteParser::default();
        let result = parser.normalize(make_raw("2024-01-02", "16:29:60", "AAPL"));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_normalize_malformed_date_in_window() {
        let parser = QuoteParser::default();
        let result = parser.normalize(make_raw("2024/01/02", "10:00:00", "AAPL"));
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_normalize_missing_fields() {
        let parser = QuoteParser::default();

        let no_time = RawQuote {
            date: Some("2024-01-02".to_string()),
            ..Default::default()
        };
        assert!(matches!(parser.normalize(no_time), Err(Error::MissingField(f)) if f == "time"));

        let no_date = RawQuote {
            time: Some("10:00:00".to_string()),
            ..Default::default()
        };
        assert!(matches!(parser.normalize(no_date), Err(Error::MissingField(f)) if f == "date"));
    }

    #[test]
    fn test_normalize_absent_symbol_and_price() {
        let parser = QuoteParser::default();
        let raw = RawQuote {
            date: Some("2024-01-02".to_string()),
            time: Some("10:00:00".to_string()),
            ..Default::default()
        };
        let Normalized::Accepted(quote) = parser.normalize(raw).unwrap() else {
            panic!("expected an accepted quote");
        };
        assert_eq!(quote.symbol, "");
        assert_eq!(quote.price, "");
    }
}
