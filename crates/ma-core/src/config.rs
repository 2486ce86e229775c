// File: crates/ma-core/src/config.rs
// Summary: Explicit per-run configuration record, validated before any I/O.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{IndicatorError, Result};
use crate::window::Window;

pub const DEFAULT_SYMBOL: &str = "IBM";
pub const DEFAULT_SHORT: Window = Window::literal(50);
pub const DEFAULT_LONG: Window = Window::literal(200);
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything one run needs: instrument, date range `[start, end)`, windows and
/// output location.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub short: Window,
    pub long: Window,
    pub output_dir: PathBuf,
    /// Drop the first `long - 1` EMA rows so row counts match the SMA table.
    pub ema_warmup_trim: bool,
}

impl RunConfig {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self { symbol: symbol.into(), start, end, ..Self::default() }
    }

    pub fn with_windows(mut self, short: Window, long: Window) -> Self {
        self.short = short;
        self.long = long;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_ema_warmup_trim(mut self, on: bool) -> Self {
        self.ema_warmup_trim = on;
        self
    }

    /// Reject configurations that cannot produce a run.
    /// `short >= long` is allowed; see [`RunConfig::windows_inverted`].
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(IndicatorError::invalid_config("symbol must not be empty"));
        }
        if self.start >= self.end {
            return Err(IndicatorError::invalid_config(format!(
                "start date {} must be before end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Short window not shorter than the long one (allowed, but unusual).
    pub fn windows_inverted(&self) -> bool {
        self.short >= self.long
    }

    /// The larger of the two windows.
    pub fn longest_window(&self) -> Window {
        self.short.max(self.long)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            start: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            short: DEFAULT_SHORT,
            long: DEFAULT_LONG,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            ema_warmup_trim: false,
        }
    }
}
