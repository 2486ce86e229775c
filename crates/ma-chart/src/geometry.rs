// File: crates/ma-chart/src/geometry.rs
// Summary: Pixel rectangle helpers for the plot area.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// Surface minus insets. Never inverted: a surface smaller than its insets
    /// yields a zero-sized rect at the inset origin.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 * 0.5 }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}
