//! Common utilities for integration tests

pub mod cli;

use chrono::{Days, NaiveDate};

/// Fixed reference day used by every integration test
pub const NOW: &str = "2024-03-15";

pub fn now() -> NaiveDate {
    NaiveDate::parse_from_str(NOW, "%Y-%m-%d").unwrap()
}

/// Default-layout line `days_ago` days before [`NOW`], at `hour`:00:00.
pub fn line(days_ago: u64, hour: u32) -> String {
    now()
        .checked_sub_days(Days::new(days_ago))
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .format("%Y%m%d_%H%M%S")
        .to_string()
}

/// Newline-joined input, one line per offset, all at 02:00.
pub fn input(offsets: &[u64]) -> String {
    offsets.iter().map(|&n| line(n, 2) + "\n").collect()
}
