// File: crates/ma-chart/src/axis.rs
// Summary: Axis model with labels, ranges and tick formatting (numbers or calendar dates).

use chrono::{Datelike, NaiveDate};

use crate::grid::{linspace, month_ticks, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Number,
    /// Values are day numbers from [`date_to_x`].
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

/// X coordinate of a calendar date (days since 0001-01-01 CE).
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Inverse of [`date_to_x`], rounding to the nearest day.
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Number }
    }

    pub fn dates(label: impl Into<String>, first: NaiveDate, last: NaiveDate) -> Self {
        Self { label: label.into(), min: date_to_x(first), max: date_to_x(last), format: TickFormat::Date }
    }

    pub fn default_x() -> Self {
        Self::new("Date", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Price ($)", 0.0, 100.0)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    /// Tick positions with their labels, at most about `max_ticks` of them.
    pub fn ticks(&self, max_ticks: usize) -> Vec<(f64, String)> {
        match self.format {
            TickFormat::Number => {
                let (ticks, step) = nice_ticks(self.min, self.max, max_ticks);
                let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()).min(6.0) as usize };
                ticks.into_iter().map(|v| (v, format!("{v:.decimals$}"))).collect()
            }
            TickFormat::Date => self.date_ticks(max_ticks),
        }
    }

    fn date_ticks(&self, max_ticks: usize) -> Vec<(f64, String)> {
        let (Some(first), Some(last)) = (x_to_date(self.min), x_to_date(self.max)) else {
            return Vec::new();
        };
        let (months, step) = month_ticks(first, last, max_ticks);
        if months.is_empty() {
            // under a month: spread day ticks evenly
            let n = max_ticks.clamp(2, 8);
            return linspace(self.min, self.max, n)
                .into_iter()
                .filter_map(|x| x_to_date(x).map(|d| (x.round(), d.format("%Y-%m-%d").to_string())))
                .collect();
        }
        months
            .into_iter()
            .map(|d| {
                let label = if step >= 12 && d.month() == 1 {
                    d.format("%Y").to_string()
                } else {
                    d.format("%Y-%m").to_string()
                };
                (date_to_x(d), label)
            })
            .collect()
    }
}
