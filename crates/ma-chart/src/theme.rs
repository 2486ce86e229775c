// File: crates/ma-chart/src/theme.rs
// Summary: Colour themes for chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Default stroke colours, cycled by series index.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 232, 232, 236),
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 70, 70, 70),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
                skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
                skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
            ],
        }
    }

    /// Grey plot area with white grid lines.
    pub fn bmh() -> Self {
        Self {
            name: "bmh",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 0xee, 0xee, 0xee),
            grid: skia::Color::from_argb(255, 0xb2, 0xb2, 0xb2),
            axis_line: skia::Color::from_argb(255, 0xbc, 0xbc, 0xbc),
            axis_label: skia::Color::from_argb(255, 0x20, 0x20, 0x20),
            tick: skia::Color::from_argb(255, 0x40, 0x40, 0x40),
            title: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            legend_background: skia::Color::from_argb(230, 0xee, 0xee, 0xee),
            legend_border: skia::Color::from_argb(255, 0xbc, 0xbc, 0xbc),
            palette: [
                skia::Color::from_argb(255, 0x34, 0x8a, 0xbd),
                skia::Color::from_argb(255, 0xa6, 0x0f, 0x28),
                skia::Color::from_argb(255, 0x7a, 0x68, 0xa6),
                skia::Color::from_argb(255, 0x46, 0x78, 0x21),
                skia::Color::from_argb(255, 0xd5, 0x5e, 0x00),
                skia::Color::from_argb(255, 0xcc, 0x79, 0xa7),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 60),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 200, 200, 210),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::bmh(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
