// File: crates/ma-core/src/ema.rs
// Summary: Recursive exponential moving average (seeded with the first price).

use crate::series::{DerivedSeries, TimeSeries};
use crate::window::Window;

/// Exponential moving average with span `span`:
///
/// ```text
/// alpha = 2 / (span + 1)
/// E[0]  = S[0]
/// E[i]  = alpha * S[i] + (1 - alpha) * E[i-1]
/// ```
///
/// This is the recursive form; it is not re-weighted over the full history, so
/// early values differ from the "adjusted" EMA for roughly `span` samples.
///
/// Every slot of a gap-free input is defined. A missing price leaves its slot
/// undefined and the last value carries over unchanged to the next price; slots
/// before the first price are undefined.
pub fn ema(series: &TimeSeries, span: Window) -> DerivedSeries {
    let alpha = span.alpha();
    let decay = 1.0 - alpha;
    let mut prev: Option<f64> = None;

    let values = series
        .samples()
        .iter()
        .map(|s| {
            if s.is_missing() {
                return None;
            }
            let next = match prev {
                None => s.value,
                Some(p) => alpha * s.value + decay * p,
            };
            prev = Some(next);
            Some(next)
        })
        .collect();

    DerivedSeries::new(format!("EMA_{span}"), series.dates().collect(), values)
}
