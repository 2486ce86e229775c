// File: crates/ma-chart/src/lib.rs
// Summary: Chart library entry point; exports line-chart construction and headless rendering.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::{date_to_x, x_to_date, Axis, TickFormat};
pub use chart::{Chart, RenderOptions};
pub use series::LineSeries;
pub use skia_safe::Color;
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ViewState;
