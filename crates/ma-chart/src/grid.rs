// File: crates/ma-chart/src/grid.rs
// Summary: Tick layout helpers: evenly spaced, "nice" numeric and calendar-month ticks.

use chrono::{Datelike, NaiveDate};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round step (1, 2, 5 times a power of ten) giving at most about `max_ticks` ticks over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let raw = span.abs().max(1e-12) / max_ticks.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of a nice step inside `[min, max]`, plus the step itself.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> (Vec<f64>, f64) {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return (vec![min], 1.0);
    }
    let step = nice_step(max - min, max_ticks);
    let first = (min / step).ceil() * step;
    let ticks = (0..)
        .map(|k| first + k as f64 * step)
        .take_while(|v| *v <= max + step * 1e-9)
        .collect();
    (ticks, step)
}

const MONTH_STEPS: [i32; 8] = [1, 2, 3, 6, 12, 24, 60, 120];

/// First-of-month dates in `[first, last]`, spaced by a month step chosen so at
/// most `max_ticks` fit. Returns the dates and the step in months; an empty list
/// when the range is shorter than a month.
pub fn month_ticks(first: NaiveDate, last: NaiveDate, max_ticks: usize) -> (Vec<NaiveDate>, i32) {
    let index = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
    let span = index(last) - index(first);
    if last <= first || span < 1 {
        return (Vec::new(), 0);
    }
    let max_ticks = max_ticks.max(2) as i32;
    let step = MONTH_STEPS
        .iter()
        .copied()
        .find(|s| span / s + 1 <= max_ticks)
        .unwrap_or(MONTH_STEPS[MONTH_STEPS.len() - 1]);

    // first aligned month at or after `first`
    let mut m = index(first);
    if first.day() != 1 {
        m += 1;
    }
    m += (step - m.rem_euclid(step)) % step;

    let mut ticks = Vec::new();
    while let Some(d) = NaiveDate::from_ymd_opt(m.div_euclid(12), m.rem_euclid(12) as u32 + 1, 1) {
        if d > last {
            break;
        }
        ticks.push(d);
        m += step;
    }
    (ticks, step)
}
