// File: crates/ma-chart/src/text.rs
// Summary: Label rendering through Skia textlayout with system font fallback.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

const SANS: [&str; 6] = ["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"];
const MONO: [&str; 5] = ["DejaVu Sans Mono", "Menlo", "Consolas", "Roboto Mono", "monospace"];

/// Which point of the text sits on the requested x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Size, colour and face of a run of label text.
#[derive(Clone, Copy, Debug)]
pub struct Label {
    pub size: f32,
    pub color: skia::Color,
    /// Monospaced digits, for tick values.
    pub numeric: bool,
}

impl Label {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size: size.max(1.0), color, numeric: false }
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

pub struct TextShaper {
    collection: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut collection = FontCollection::new();
        collection.set_default_font_manager(skia::FontMgr::default(), None);
        Self { collection }
    }

    fn paragraph(&self, text: &str, label: Label) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(label.size);
        style.set_color(label.color);
        if label.numeric {
            style.set_font_families(&MONO);
        } else {
            style.set_font_families(&SANS);
        }

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), self.collection.clone());
        builder.push_style(&style);
        builder.add_text(text);
        let mut p = builder.build();
        p.layout(1.0e6);
        p
    }

    pub fn width(&self, text: &str, label: Label) -> f32 {
        self.paragraph(text, label).longest_line()
    }

    /// Draw one line with its baseline at `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), anchor: Anchor, label: Label) {
        let mut p = self.paragraph(text, label);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        // paragraphs paint from their top-left corner
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (left, top));
    }

    /// Text turned a quarter counter-clockwise, centred on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, (cx, cy): (f32, f32), label: Label) {
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, (0.0, label.size * 0.35), Anchor::Middle, label);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
