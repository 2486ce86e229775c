// File: crates/ma-chart/src/series.rs
// Summary: Line series model (x, y points plus stroke styling).
// Notes:
// - Non-finite y values split the line into separate runs instead of being drawn.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct LineSeries {
    pub label: String,
    pub data: Vec<(f64, f64)>,
    /// Stroke colour; `None` picks from the theme palette by series index.
    pub color: Option<skia::Color>,
    pub width: f32,
}

impl LineSeries {
    pub fn new(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data, color: None, width: 1.5 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.5);
        self
    }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` if there are none.
    pub fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        self.data
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }
}
