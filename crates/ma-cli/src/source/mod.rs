// File: crates/ma-cli/src/source/mod.rs
// Summary: Concrete price sources behind `ma_core::DataSource`.

mod csv;
mod yahoo;

pub use self::csv::CsvSource;
pub use self::yahoo::{parse_chart, YahooSource};

use chrono::{DateTime, NaiveDate};

/// Calendar date of a Unix timestamp in seconds, shifted by `offset_secs`.
pub(crate) fn epoch_to_date(secs: i64, offset_secs: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(secs.checked_add(offset_secs)?, 0).map(|dt| dt.date_naive())
}
