// File: crates/ma-cli/src/source/csv.rs
// Summary: Daily closes from a local CSV (a previous export or a downloaded history).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};
use ma_core::{DataSource, IndicatorError, Result, Sample, TimeSeries};

use super::epoch_to_date;

const DATE_HEADERS: [&str; 4] = ["date", "datetime", "time", "timestamp"];
// preference order: an exported table's Price wins over a raw Close
const PRICE_HEADERS: [&str; 4] = ["price", "close", "adj close", "adj_close"];

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, symbol: &str) -> Result<Vec<Sample>> {
        let unavailable = |reason: String| IndicatorError::data_unavailable(symbol, reason);

        let mut rdr = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(::csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| unavailable(format!("opening {}: {e}", self.path.display())))?;

        let headers = rdr
            .headers()
            .map_err(|e| unavailable(format!("reading header: {e}")))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        debug!("{}: headers {:?}", self.path.display(), headers);

        let idx = |names: &[&str]| names.iter().find_map(|want| headers.iter().position(|h| h == want));
        let i_date = idx(&DATE_HEADERS).ok_or_else(|| unavailable("no date column".to_string()))?;
        let i_price = idx(&PRICE_HEADERS).ok_or_else(|| unavailable("no price/close column".to_string()))?;

        let mut out = Vec::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| unavailable(format!("row {}: {e}", n + 2)))?;
            let raw_date = rec.get(i_date).unwrap_or_default();
            let date = parse_date(raw_date)
                .ok_or_else(|| unavailable(format!("row {}: bad date '{raw_date}'", n + 2)))?;
            let raw_price = rec.get(i_price).unwrap_or_default();
            let value = if raw_price.is_empty() {
                f64::NAN
            } else {
                raw_price
                    .parse::<f64>()
                    .map_err(|_| unavailable(format!("row {}: bad price '{raw_price}'", n + 2)))?
            };
            out.push(Sample::new(date, value));
        }
        Ok(out)
    }
}

impl DataSource for CsvSource {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        let (series, dropped) = TimeSeries::from_unsorted(self.load(symbol)?);
        if dropped > 0 {
            warn!("{}: dropped {dropped} duplicate date(s)", self.path.display());
        }
        let series = series.between(start, end);
        if series.is_empty() {
            return Err(IndicatorError::data_unavailable(
                symbol,
                format!("no rows between {start} and {end} in {}", self.path.display()),
            ));
        }
        Ok(series)
    }
}

/// `YYYY-MM-DD` (anything after the first ten characters is ignored) or Unix
/// time in seconds or milliseconds.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Some(head) = s.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
            return Some(d);
        }
    }
    let n = s.parse::<i64>().ok()?;
    // epoch ms -> sec
    let secs = if n.abs() > 10_i64.pow(12) { n / 1000 } else { n };
    epoch_to_date(secs, 0)
}
