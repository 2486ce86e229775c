// File: crates/ma-chart/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps `[d0, d1]` in data space onto `[p0, p1]` in pixels.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    p0: f32,
    p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        let d1 = if (d1 - d0).abs() < 1e-12 { d0 + 1.0 } else { d1 };
        Self { d0, d1, p0, p1 }
    }

    /// Horizontal scale: axis min at the left edge of the plot.
    pub fn x(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.left as f32, plot.right as f32)
    }

    /// Vertical scale: axis min at the bottom edge of the plot.
    pub fn y(axis: &Axis, plot: &RectI32) -> Self {
        Self::new(axis.min, axis.max, plot.bottom as f32, plot.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.p0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.p1 - self.p0)
    }
}
