// File: crates/ma-core/src/source.rs
// Summary: Data source contract for daily closing prices.

use chrono::NaiveDate;

use crate::error::Result;
use crate::series::TimeSeries;

/// Supplies closing prices for `symbol` on trading days in `[start, end)`,
/// sorted ascending. Implementations report every failure, including an empty
/// result, as `IndicatorError::DataUnavailable`.
pub trait DataSource {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        (**self).fetch(symbol, start, end)
    }
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        (**self).fetch(symbol, start, end)
    }
}
