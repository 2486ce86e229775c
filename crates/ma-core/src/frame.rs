// File: crates/ma-core/src/frame.rs
// Summary: Aligned table of price and derived series; only fully-defined rows survive.

use chrono::NaiveDate;

use crate::error::{IndicatorError, Result};
use crate::series::{DerivedSeries, TimeSeries};

/// Name of the first column of every frame.
pub const PRICE_COLUMN: &str = "Price";

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub label: String,
    pub values: Vec<f64>,
}

/// Rows keyed by date; column 0 is always the price.
/// Contract: dates strictly increasing, every column as long as `dates`,
/// every value finite.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorFrame {
    dates: Vec<NaiveDate>,
    columns: Vec<Column>,
}

impl IndicatorFrame {
    /// Price column only, dropping dates with a missing price.
    pub fn price_only(price: &TimeSeries) -> Self {
        let (dates, values): (Vec<NaiveDate>, Vec<f64>) = price
            .samples()
            .iter()
            .filter(|s| !s.is_missing())
            .map(|s| (s.date, s.value))
            .unzip();
        Self { dates, columns: vec![Column { label: PRICE_COLUMN.to_string(), values }] }
    }

    /// Join `price` with `derived`, keeping the dates where the price and every
    /// derived series are defined. Each derived series must have been computed
    /// from `price` (same dates, same order).
    pub fn align(price: &TimeSeries, derived: &[DerivedSeries]) -> Result<Self> {
        for d in derived {
            if d.len() != price.len() || !d.dates().iter().copied().eq(price.dates()) {
                return Err(IndicatorError::invalid_series(format!(
                    "derived series '{}' is not aligned with the price series",
                    d.label()
                )));
            }
        }

        let mut dates = Vec::new();
        let mut columns: Vec<Column> = std::iter::once(PRICE_COLUMN.to_string())
            .chain(derived.iter().map(|d| d.label().to_string()))
            .map(|label| Column { label, values: Vec::new() })
            .collect();

        'rows: for (i, sample) in price.samples().iter().enumerate() {
            if sample.is_missing() {
                continue;
            }
            let mut row = Vec::with_capacity(derived.len());
            for d in derived {
                match d.get(i) {
                    Some(v) => row.push(v),
                    None => continue 'rows,
                }
            }
            dates.push(sample.date);
            columns[0].values.push(sample.value);
            for (col, v) in columns[1..].iter_mut().zip(row) {
                col.values.push(v);
            }
        }

        Ok(Self { dates, columns })
    }

    /// Rebuild a frame from parsed columns (e.g. a re-read export).
    pub fn from_columns(dates: Vec<NaiveDate>, columns: Vec<Column>) -> Result<Self> {
        if columns.first().map(|c| c.label.as_str()) != Some(PRICE_COLUMN) {
            return Err(IndicatorError::invalid_series(format!("first column must be '{PRICE_COLUMN}'")));
        }
        if let Some(c) = columns.iter().find(|c| c.values.len() != dates.len()) {
            return Err(IndicatorError::invalid_series(format!(
                "column '{}' has {} values for {} dates",
                c.label,
                c.values.len(),
                dates.len()
            )));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(IndicatorError::invalid_series("dates must be strictly increasing"));
        }
        Ok(Self { dates, columns })
    }

    pub fn len(&self) -> usize { self.dates.len() }
    pub fn is_empty(&self) -> bool { self.dates.is_empty() }
    pub fn dates(&self) -> &[NaiveDate] { &self.dates }
    pub fn columns(&self) -> &[Column] { &self.columns }
    pub fn price(&self) -> &[f64] { &self.columns[0].values }

    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|c| c.label.as_str())
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        (index < self.len()).then_some(Row { frame: self, index })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.len()).map(move |index| Row { frame: self, index })
    }

    /// The last `n` rows (fewer if the frame is shorter).
    pub fn tail(&self, n: usize) -> impl Iterator<Item = Row<'_>> + '_ {
        (self.len().saturating_sub(n)..self.len()).map(move |index| Row { frame: self, index })
    }
}

/// Borrowed view of one frame row.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    frame: &'a IndicatorFrame,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn date(&self) -> NaiveDate {
        self.frame.dates[self.index]
    }

    /// Values in column order (price first).
    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        let (frame, index) = (self.frame, self.index);
        frame.columns.iter().map(move |c| c.values[index])
    }
}
