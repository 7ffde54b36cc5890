//! Parsing input lines into calendar dates

use crate::error::{FilterError, Result};
use chrono::{NaiveDate, NaiveDateTime, ParseError};
use std::fmt;

/// `YYYYMMDD_HHMMSS`, the format produced by `date +%Y%m%d_%H%M%S`
pub const DEFAULT_LAYOUT: &str = "%Y%m%d_%H%M%S";

/// A chrono `strftime` pattern describing one input line.
///
/// Only the calendar date matters for bucketing. The time of day is parsed
/// when the layout has one, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout(String);

impl Layout {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `line` and return its calendar date.
    ///
    /// Date-time layouts are tried first; a date-only layout such as
    /// `%Y%m%d` falls through to a plain date parse.
    pub fn parse_date(&self, line: &str) -> std::result::Result<NaiveDate, ParseError> {
        match NaiveDateTime::parse_from_str(line, &self.0) {
            Ok(datetime) => Ok(datetime.date()),
            Err(err) => NaiveDate::parse_from_str(line, &self.0).map_err(|_| err),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_LAYOUT)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One input line and the calendar date it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRecord<'a> {
    /// Original line, returned verbatim in results
    pub line: &'a str,
    pub date: NaiveDate,
}

/// Parse every line under `layout`.
///
/// Fails on the first line that does not match; no records are returned in
/// that case.
pub fn parse_records<'a, S: AsRef<str>>(
    lines: &'a [S],
    layout: &Layout,
) -> Result<Vec<TimestampRecord<'a>>> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref();
            layout
                .parse_date(line)
                .map(|date| TimestampRecord { line, date })
                .map_err(|source| FilterError::Parse {
                    line: line.to_string(),
                    position: i + 1,
                    layout: layout.to_string(),
                    source,
                })
        })
        .collect()
}
