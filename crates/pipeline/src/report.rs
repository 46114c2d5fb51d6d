//! Plain-text day report.

use std::io::Write;

use feed_core::{DaySummary, Result};

/// Line written between two consecutive day reports.
pub const DAY_SEPARATOR: &str = "****************************************";

/// Writes day summaries one after another, separated by [`DAY_SEPARATOR`].
pub struct ReportWriter<W: Write> {
    out: W,
    days_written: usize,
}

impl<W: Write> ReportWriter<W> {
    /// Create a writer over `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            days_written: 0,
        }
    }

    /// Write one day report.
    pub fn write_summary(&mut self, summary: &DaySummary) -> Result<()> {
        if self.days_written > 0 {
            writeln!(self.out, "{}", DAY_SEPARATOR)?;
        }
        writeln!(self.out, "{}", summary)?;
        self.days_written += 1;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_summary(day: u32, symbol: &str) -> DaySummary {
        DaySummary {
            trading_day: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            valid_quote_count: 1,
            last_quote_time: NaiveTime::from_hms_opt(9, 45, 0).unwrap(),
            busiest_hour: Some(9),
            busiest_symbol: Some(symbol.to_string()),
        }
    }

    #[test]
    fn test_separator_length() {
        assert_eq!(DAY_SEPARATOR, "**".repeat(20));
    }

    #[test]
    fn test_no_output_without_summaries() {
        let writer = ReportWriter::new(Vec::new());
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_single_day_has_no_separator() {
        let mut writer = ReportWriter::new(Vec::new());
        writer.write_summary(&make_summary(2, "AAPL")).unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();

        assert!(!text.contains(DAY_SEPARATOR));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_separator_between_days_only() {
        let mut writer = ReportWriter::new(Vec::new());
        for (day, symbol) in [(2, "AAPL"), (3, "MSFT"), (4, "IBM")] {
            writer.write_summary(&make_summary(day, symbol)).unwrap();
        }
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 17);
        assert_eq!(lines.iter().filter(|l| **l == DAY_SEPARATOR).count(), 2);
        assert_eq!(lines[5], DAY_SEPARATOR);
        assert_eq!(lines[11], DAY_SEPARATOR);
        assert_eq!(lines[16], "Most active symbol = IBM");
    }
}
