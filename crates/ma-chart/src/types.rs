// File: crates/ma-chart/src/types.rs
// Summary: Surface size defaults and plot margins.

/// Default surface width in pixels (12 in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Space between the surface edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Insets {
    // y tick labels on the left, title on top, date ticks and axis label below
    fn default() -> Self {
        Self { left: 84, right: 28, top: 48, bottom: 60 }
    }
}
