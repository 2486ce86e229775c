// File: crates/ma-cli/src/pipeline.rs
// Summary: Single-run orchestration: validate, fetch, transform, align, export.

use std::fmt::Write as _;

use log::{info, warn};
use ma_core::{DataSource, IndicatorError, IndicatorFrame, IndicatorKind, Result, RunConfig, TimeSeries};

use crate::export::{ExportPaths, Exporter, Study, StudyKind};

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub symbol: String,
    pub kind: StudyKind,
    pub frame: IndicatorFrame,
    pub paths: ExportPaths,
}

impl RunReport {
    pub fn rows(&self) -> usize {
        self.frame.len()
    }

    /// Plain-text table of the last `n` rows, header included.
    pub fn summary(&self, n: usize) -> String {
        let mut out = format!("{:<10}", "Date");
        for label in self.frame.labels() {
            let _ = write!(out, " {label:>12}");
        }
        for row in self.frame.tail(n) {
            let _ = write!(out, "\n{}", row.date().format("%Y-%m-%d"));
            for v in row.values() {
                let _ = write!(out, " {v:>12.6}");
            }
        }
        out
    }
}

/// Compute both moving averages of `price` and join them into a frame.
pub fn compute_frame(kind: IndicatorKind, price: &TimeSeries, cfg: &RunConfig) -> Result<IndicatorFrame> {
    if price.is_empty() {
        return Err(IndicatorError::data_unavailable(&cfg.symbol, "no price data in range"));
    }
    if price.missing_count() == price.len() {
        return Err(IndicatorError::data_unavailable(&cfg.symbol, "every close in range is missing"));
    }
    let longest = cfg.longest_window().get();
    if kind == IndicatorKind::Sma && longest > price.len() {
        return Err(IndicatorError::insufficient_history(longest, price.len()));
    }

    let [short_label, long_label] = kind.column_labels(cfg.short, cfg.long);
    let short = kind.compute(price, cfg.short).with_label(short_label);
    let mut long = kind.compute(price, cfg.long).with_label(long_label);
    if kind == IndicatorKind::Ema && cfg.ema_warmup_trim {
        long = long.without_warmup(cfg.long.lookback());
    }

    let frame = IndicatorFrame::align(price, &[short, long])?;
    if frame.is_empty() {
        return Err(IndicatorError::insufficient_history(longest, price.len()));
    }
    Ok(frame)
}

fn fetch(cfg: &RunConfig, source: &impl DataSource) -> Result<TimeSeries> {
    info!("Downloading {} data...", cfg.symbol);
    let price = source.fetch(&cfg.symbol, cfg.start, cfg.end)?;
    info!(
        "{}: {} rows from {} to {}",
        cfg.symbol,
        price.len(),
        price.first_date().map(|d| d.to_string()).unwrap_or_default(),
        price.last_date().map(|d| d.to_string()).unwrap_or_default()
    );
    Ok(price)
}

fn log_paths(paths: &ExportPaths) {
    info!("Results saved to:");
    info!("- Plot: {}", paths.chart.display());
    info!("- Data: {}", paths.table.display());
}

/// SMA or EMA study for `cfg`. Configuration errors surface before any fetch.
pub fn run_indicator(
    kind: IndicatorKind,
    cfg: &RunConfig,
    source: &impl DataSource,
    exporter: &impl Exporter,
) -> Result<RunReport> {
    cfg.validate()?;
    if cfg.windows_inverted() {
        warn!("short window {} is not shorter than long window {}", cfg.short, cfg.long);
    }

    let price = fetch(cfg, source)?;
    let frame = compute_frame(kind, &price, cfg)?;
    info!("{} rows with both {} columns defined", frame.len(), kind.slug().to_uppercase());

    let study = Study::indicator(&cfg.symbol, kind, cfg.short, cfg.long);
    let paths = exporter.export(&frame, &study)?;
    log_paths(&paths);

    Ok(RunReport { symbol: cfg.symbol.clone(), kind: study.kind, frame, paths })
}

/// Price-only study: the closes themselves, tabulated and charted.
pub fn run_price(cfg: &RunConfig, source: &impl DataSource, exporter: &impl Exporter) -> Result<RunReport> {
    cfg.validate()?;

    let price = fetch(cfg, source)?;
    let frame = IndicatorFrame::price_only(&price);
    if frame.is_empty() {
        return Err(IndicatorError::data_unavailable(&cfg.symbol, "every close in range is missing"));
    }

    let study = Study::price(&cfg.symbol, cfg.start, cfg.end);
    let paths = exporter.export(&frame, &study)?;
    log_paths(&paths);

    Ok(RunReport { symbol: cfg.symbol.clone(), kind: study.kind, frame, paths })
}
