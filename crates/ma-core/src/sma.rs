// File: crates/ma-core/src/sma.rs
// Summary: Simple moving average over a daily price series.

use crate::series::{DerivedSeries, Sample, TimeSeries};
use crate::window::Window;

/// Trailing mean of `window` samples.
///
/// Slot `i` is defined for `i >= window - 1` and equals the mean of samples
/// `i - window + 1 ..= i`. A missing price anywhere in the trailing window leaves
/// that slot undefined. With `window == 1` the output equals the input bitwise;
/// with `window > len` nothing is defined.
pub fn sma(series: &TimeSeries, window: Window) -> DerivedSeries {
    let w = window.get();
    let samples = series.samples();
    let mut values = vec![None; samples.len()];

    if samples.len() >= w {
        for (start, win) in samples.windows(w).enumerate() {
            values[start + w - 1] = window_mean(win);
        }
    }

    DerivedSeries::new(format!("SMA_{w}"), series.dates().collect(), values)
}

// Each window is summed from scratch so no rounding error carries over between slots.
fn window_mean(win: &[Sample]) -> Option<f64> {
    let (first, rest) = win.split_first()?;
    if first.is_missing() {
        return None;
    }
    let mut sum = first.value;
    for s in rest {
        if s.is_missing() {
            return None;
        }
        sum += s.value;
    }
    Some(sum / win.len() as f64)
}
