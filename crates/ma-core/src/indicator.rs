// File: crates/ma-core/src/indicator.rs
// Summary: Moving-average trait and the indicator kinds a run can request.

use crate::ema::ema;
use crate::series::{DerivedSeries, TimeSeries};
use crate::sma::sma;
use crate::window::Window;

/// A moving average turns a price series into a derived series of the same length.
pub trait MovingAverage {
    fn id(&self) -> &'static str;
    fn compute(&self, input: &TimeSeries, window: Window) -> DerivedSeries;
    /// Leading slots left undefined on gap-free input.
    fn lookback(&self, window: Window) -> usize;
}

pub struct Sma;

impl MovingAverage for Sma {
    fn id(&self) -> &'static str { "sma" }
    fn compute(&self, input: &TimeSeries, window: Window) -> DerivedSeries { sma(input, window) }
    fn lookback(&self, window: Window) -> usize { window.lookback() }
}

pub struct Ema;

impl MovingAverage for Ema {
    fn id(&self) -> &'static str { "ema" }
    fn compute(&self, input: &TimeSeries, window: Window) -> DerivedSeries { ema(input, window) }
    fn lookback(&self, _window: Window) -> usize { 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma,
    Ema,
}

impl IndicatorKind {
    pub fn transform(self) -> &'static dyn MovingAverage {
        match self {
            IndicatorKind::Sma => &Sma,
            IndicatorKind::Ema => &Ema,
        }
    }

    /// Lowercase tag used in output file names.
    pub fn slug(self) -> &'static str {
        self.transform().id()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IndicatorKind::Sma => "Simple Moving Averages",
            IndicatorKind::Ema => "Exponential Moving Averages",
        }
    }

    /// Table column names for the short and long series.
    pub fn column_labels(self, short: Window, long: Window) -> [String; 2] {
        match self {
            IndicatorKind::Sma => [format!("SMA_{short}"), format!("SMA_{long}")],
            IndicatorKind::Ema => ["Short EMA".to_string(), "Long EMA".to_string()],
        }
    }

    pub fn compute(self, input: &TimeSeries, window: Window) -> DerivedSeries {
        self.transform().compute(input, window)
    }
}
