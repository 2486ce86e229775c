// File: crates/ma-cli/src/source/yahoo.rs
// Summary: Daily closes from the Yahoo Finance v8 chart endpoint (blocking HTTPS + JSON).

use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, warn};
use ma_core::{DataSource, IndicatorError, Result, Sample, TimeSeries};
use serde::Deserialize;

use super::epoch_to_date;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = concat!("ma-indicator/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);

pub struct YahooSource {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl YahooSource {
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| IndicatorError::invalid_config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { http, base_url: DEFAULT_BASE_URL.to_string() })
    }

    /// Point at another host serving the same payload (mirrors, local stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn request(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> std::result::Result<String, String> {
        let period = |d: NaiveDate| d.and_hms_opt(0, 0, 0).map(|t| t.and_utc().timestamp()).unwrap_or_default();
        let url = format!("{}/{}", self.base_url, symbol);
        debug!("GET {url} period1={} period2={}", period(start), period(end));

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("period1", period(start).to_string()),
                ("period2", period(end).to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .map_err(|e| format!("request failed: {e}"))?;
        let status = resp.status();
        let body = resp.text().map_err(|e| format!("reading response failed: {e}"))?;
        debug!("HTTP {status}, {} bytes", body.len());
        // error responses still carry a JSON `chart.error`; let the parser report it
        if !status.is_success() && !body.trim_start().starts_with('{') {
            return Err(format!("HTTP {status}"));
        }
        Ok(body)
    }
}

impl DataSource for YahooSource {
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        let body = self
            .request(symbol, start, end)
            .map_err(|reason| IndicatorError::data_unavailable(symbol, reason))?;
        parse_chart(symbol, &body, start, end)
    }
}

#[derive(Deserialize)]
struct Envelope {
    chart: ChartBody,
}

#[derive(Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartResult {
    meta: Meta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Meta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Deserialize)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Decode a chart payload into closes on `[start, end)`.
///
/// Timestamps are shifted by the exchange's `gmtoffset` before taking the date.
/// Null closes become missing samples; duplicate dates keep the last value.
pub fn parse_chart(symbol: &str, body: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
    let unavailable = |reason: String| IndicatorError::data_unavailable(symbol, reason);

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| unavailable(format!("malformed chart payload: {e}")))?;
    if let Some(err) = envelope.chart.error {
        return Err(unavailable(format!("{}: {}", err.code, err.description)));
    }
    let result = envelope
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| unavailable("chart payload has no result".to_string()))?;

    let closes = result.indicators.quote.into_iter().next().map(|q| q.close).unwrap_or_default();
    if closes.len() != result.timestamp.len() {
        return Err(unavailable(format!(
            "{} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        )));
    }

    let offset = result.meta.gmtoffset;
    let mut samples = Vec::with_capacity(closes.len());
    for (ts, close) in result.timestamp.iter().zip(closes) {
        let date = epoch_to_date(*ts, offset).ok_or_else(|| unavailable(format!("timestamp {ts} out of range")))?;
        samples.push(Sample::new(date, close.unwrap_or(f64::NAN)));
    }

    let (series, dropped) = TimeSeries::from_unsorted(samples);
    if dropped > 0 {
        warn!("{symbol}: dropped {dropped} duplicate date(s)");
    }
    let series = series.between(start, end);
    let missing = series.missing_count();
    if missing > 0 {
        warn!("{symbol}: {missing} day(s) without a close");
    }
    if series.is_empty() {
        return Err(unavailable(format!("no prices between {start} and {end}")));
    }
    Ok(series)
}
