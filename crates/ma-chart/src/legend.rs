// File: crates/ma-chart/src/legend.rs
// Summary: Legend box listing each series' stroke colour and label.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::text::{Anchor, Label, TextShaper};
use crate::theme::Theme;

const FONT_SIZE: f32 = 13.0;
const ROW_HEIGHT: f32 = 20.0;
const SWATCH: f32 = 26.0;
const PAD: f32 = 8.0;

pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub color: skia::Color,
    pub width: f32,
}

/// Draw the legend in the upper-left corner of `plot`.
pub fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, plot: &RectI32, entries: &[LegendEntry<'_>]) {
    if entries.is_empty() {
        return;
    }
    let text = Label::new(FONT_SIZE, theme.axis_label);
    let text_w = entries
        .iter()
        .map(|e| shaper.width(e.label, text))
        .fold(0.0f32, f32::max);
    let left = plot.left as f32 + 10.0;
    let top = plot.top as f32 + 10.0;
    let rect = skia::Rect::from_xywh(left, top, PAD * 3.0 + SWATCH + text_w, PAD * 2.0 + ROW_HEIGHT * entries.len() as f32);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 3.0, 3.0, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);

    for (i, e) in entries.iter().enumerate() {
        let mid = top + PAD + ROW_HEIGHT * (i as f32 + 0.5);
        swatch.set_color(e.color);
        swatch.set_stroke_width(e.width.max(1.5));
        canvas.draw_line((left + PAD, mid), (left + PAD + SWATCH, mid), &swatch);
        shaper.draw(canvas, e.label, (left + PAD * 2.0 + SWATCH, mid + FONT_SIZE * 0.35), Anchor::Start, text);
    }
}
