// File: crates/ma-core/src/series.rs
// Summary: Daily price series (input) and derived series (transform output).
// Notes:
// - A missing price is stored as a non-finite value so the input stays a flat
//   `(date, f64)` sequence; derived slots use `Option` so undefined is never zero.

use chrono::NaiveDate;

use crate::error::{IndicatorError, Result};

/// One daily closing price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
}

impl Sample {
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// A missing price (NaN or infinite).
    #[inline]
    pub fn is_missing(&self) -> bool {
        !self.value.is_finite()
    }
}

/// Ordered price samples. Contract: dates strictly increasing, no duplicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    /// Build a series, rejecting unordered or duplicated dates.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if let Some(pair) = samples.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(IndicatorError::invalid_series(format!(
                "dates must be strictly increasing: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { samples })
    }

    /// Build from `(date, value)` pairs; same validation as [`TimeSeries::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(pairs.into_iter().map(|(d, v)| Sample::new(d, v)).collect())
    }

    /// Sort by date and drop duplicate dates, keeping the last occurrence.
    /// Returns the series and the number of dropped duplicates.
    pub fn from_unsorted(mut samples: Vec<Sample>) -> (Self, usize) {
        samples.sort_by_key(|s| s.date);
        let before = samples.len();
        // dedup_by keeps the first of a run; walk reversed so the last one survives
        samples.reverse();
        samples.dedup_by_key(|s| s.date);
        samples.reverse();
        let dropped = before - samples.len();
        (Self { samples }, dropped)
    }

    /// Samples with `start <= date < end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let samples = self
            .samples
            .iter()
            .filter(|s| s.date >= start && s.date < end)
            .copied()
            .collect();
        Self { samples }
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.samples.iter().map(|s| s.date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn first_date(&self) -> Option<NaiveDate> { self.samples.first().map(|s| s.date) }
    pub fn last_date(&self) -> Option<NaiveDate> { self.samples.last().map(|s| s.date) }

    /// Number of samples with a missing price.
    pub fn missing_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_missing()).count()
    }
}

/// Transform output: one slot per input sample, `None` where undefined.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedSeries {
    label: String,
    dates: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

impl DerivedSeries {
    pub(crate) fn new(label: String, dates: Vec<NaiveDate>, values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { label, dates, values }
    }

    /// Column name used when the series is tabulated.
    pub fn label(&self) -> &str { &self.label }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark the first `lookback` slots undefined. This is an explicit warm-up trim,
    /// never applied by the transforms themselves.
    pub fn without_warmup(mut self, lookback: usize) -> Self {
        for v in self.values.iter_mut().take(lookback) {
            *v = None;
        }
        self
    }

    /// Slot count (equals the input length).
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn get(&self, index: usize) -> Option<f64> { self.values.get(index).copied().flatten() }
    pub fn dates(&self) -> &[NaiveDate] { &self.dates }
    pub fn values(&self) -> &[Option<f64>] { &self.values }

    /// Defined points in date order.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates
            .iter()
            .zip(&self.values)
            .filter_map(|(d, v)| v.map(|v| (*d, v)))
    }

    pub fn defined_len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}
