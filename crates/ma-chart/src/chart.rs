// File: crates/ma-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::RectI32;
use crate::legend::{draw_legend, LegendEntry};
use crate::scale::LinearScale;
use crate::series::LineSeries;
use crate::text::{Anchor, Label, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 17.0;
const X_TICKS: usize = 10;
const Y_TICKS: usize = 8;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels, axis labels, title and legend. Off gives a text-free
    /// image whose pixels do not depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<LineSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding y by `margin` of its span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(anyhow!("invalid surface size {}x{}", opts.width, opts.height));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(anyhow!("failed to read back surface pixels"));
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::x(&self.x_axis, &plot);
        let sy = LinearScale::y(&self.y_axis, &plot);
        let x_ticks = self.x_axis.ticks(X_TICKS);
        let y_ticks = self.y_axis.ticks(Y_TICKS);

        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &fill);

        draw_grid(canvas, theme, &plot, &sx, &sy, &x_ticks, &y_ticks);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &sx, &sy, s, self.series_color(theme, i));
        }
        canvas.restore();

        draw_axes(canvas, theme, &plot);

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_tick_labels(canvas, &shaper, theme, &plot, &sx, &sy, &x_ticks, &y_ticks);
            let axis_label = Label::new(LABEL_FONT, theme.axis_label);
            shaper.draw(
                canvas,
                &self.x_axis.label,
                (plot.center_x(), opts.height as f32 - 12.0),
                Anchor::Middle,
                axis_label,
            );
            shaper.draw_vertical(canvas, &self.y_axis.label, (16.0, plot.center_y()), axis_label);
            if let Some(title) = &self.title {
                let pos = (plot.center_x(), plot.top as f32 - 16.0);
                shaper.draw(canvas, title, pos, Anchor::Middle, Label::new(TITLE_FONT, theme.title));
            }
            if self.show_legend {
                let entries: Vec<LegendEntry<'_>> = self
                    .series
                    .iter()
                    .enumerate()
                    .map(|(i, s)| LegendEntry { label: &s.label, color: self.series_color(theme, i), width: s.width })
                    .collect();
                draw_legend(canvas, &shaper, theme, &plot, &entries);
            }
        }
    }

    fn series_color(&self, theme: &Theme, index: usize) -> skia::Color {
        self.series[index].color.unwrap_or_else(|| theme.series_color(index))
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        if x >= l && x <= r {
            canvas.draw_line((x, t), (x, b), &paint);
        }
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        if y >= t && y <= b {
            canvas.draw_line((l, y), (r, y), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, theme: &Theme, plot: &RectI32) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    plot: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let tick = Label::new(TICK_FONT, theme.tick).numeric();
    for (v, text) in x_ticks {
        let x = sx.to_px(*v);
        if x >= l && x <= r {
            shaper.draw(canvas, text, (x, b + 18.0), Anchor::Middle, tick);
        }
    }
    for (v, text) in y_ticks {
        let y = sy.to_px(*v);
        if y >= t && y <= b {
            shaper.draw(canvas, text, (l - 6.0, y + TICK_FONT * 0.35), Anchor::End, tick);
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &LineSeries, color: skia::Color) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (sx.to_px(x), sy.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if path.is_empty() {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_width(series.width);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}
