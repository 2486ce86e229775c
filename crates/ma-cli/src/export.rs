// File: crates/ma-cli/src/export.rs
// Summary: Export of an indicator frame as a CSV table and a PNG line chart.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;
use log::debug;
use ma_chart::{date_to_x, Chart, Color, LineSeries, RenderOptions, TickFormat};
use ma_core::{Column, IndicatorError, IndicatorFrame, IndicatorKind, Result, Window};

const DATE_HEADER: &str = "Date";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyKind {
    /// Closing prices only.
    Price,
    Indicator(IndicatorKind),
}

impl StudyKind {
    pub fn slug(self) -> &'static str {
        match self {
            StudyKind::Price => "price",
            StudyKind::Indicator(kind) => kind.slug(),
        }
    }
}

/// Legend text and stroke for one frame column.
#[derive(Clone, Debug)]
pub struct SeriesStyle {
    pub label: String,
    /// `None` takes the theme palette colour.
    pub color: Option<Color>,
    pub width: f32,
}

impl SeriesStyle {
    fn new(label: impl Into<String>, color: Option<Color>, width: f32) -> Self {
        Self { label: label.into(), color, width }
    }
}

/// What is being exported: file naming, chart title and per-column styling.
#[derive(Clone, Debug)]
pub struct Study {
    pub symbol: String,
    pub kind: StudyKind,
    pub title: String,
    /// One entry per frame column, in column order.
    pub styles: Vec<SeriesStyle>,
}

impl Study {
    pub fn price(symbol: &str, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.to_string(),
            kind: StudyKind::Price,
            title: format!("{symbol} Stock Price ({} to {})", start.format(DATE_FORMAT), end.format(DATE_FORMAT)),
            styles: vec![SeriesStyle::new("Price", None, 1.5)],
        }
    }

    pub fn indicator(symbol: &str, kind: IndicatorKind, short: Window, long: Window) -> Self {
        let styles = match kind {
            IndicatorKind::Sma => vec![
                SeriesStyle::new("Price", Some(Color::BLACK), 1.0),
                SeriesStyle::new(format!("{short}-day SMA"), Some(Color::BLUE), 1.5),
                SeriesStyle::new(format!("{long}-day SMA"), Some(Color::RED), 1.5),
            ],
            IndicatorKind::Ema => vec![
                SeriesStyle::new("Stock Price", Some(Color::from_argb(204, 0, 0, 0)), 1.5),
                SeriesStyle::new(format!("Short EMA ({short} days)"), Some(Color::from_argb(204, 255, 0, 0)), 1.5),
                SeriesStyle::new(format!("Long EMA ({long} days)"), Some(Color::from_argb(204, 0, 0, 255)), 1.5),
            ],
        };
        Self {
            symbol: symbol.to_string(),
            kind: StudyKind::Indicator(kind),
            title: format!("{symbol} Price with {}", kind.display_name()),
            styles,
        }
    }

    pub fn table_file_name(&self) -> String {
        format!("{}_{}_data.csv", self.symbol, self.kind.slug())
    }

    pub fn chart_file_name(&self) -> String {
        format!("{}_{}_plot.png", self.symbol, self.kind.slug())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPaths {
    pub table: PathBuf,
    pub chart: PathBuf,
}

pub trait Exporter {
    fn export(&self, frame: &IndicatorFrame, study: &Study) -> Result<ExportPaths>;
}

impl<T: Exporter + ?Sized> Exporter for &T {
    fn export(&self, frame: &IndicatorFrame, study: &Study) -> Result<ExportPaths> {
        (**self).export(frame, study)
    }
}

/// Writes `<dir>/<SYMBOL>_<kind>_data.csv` and `<dir>/<SYMBOL>_<kind>_plot.png`.
pub struct FileExporter {
    pub output_dir: PathBuf,
    pub render: RenderOptions,
}

impl FileExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), render: RenderOptions::default() }
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

impl Exporter for FileExporter {
    fn export(&self, frame: &IndicatorFrame, study: &Study) -> Result<ExportPaths> {
        let table = self.output_dir.join(study.table_file_name());
        let chart = self.output_dir.join(study.chart_file_name());

        // render first: a chart failure leaves nothing on disk
        let png = build_chart(frame, study)
            .render_to_png_bytes(&self.render)
            .map_err(|e| IndicatorError::export_failure(&chart, e))?;

        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| IndicatorError::export_failure(&self.output_dir, e))?;
        write_table(frame, &table).map_err(|e| IndicatorError::export_failure(&table, e))?;
        debug!("wrote {} rows to {}", frame.len(), table.display());

        if let Err(e) = std::fs::write(&chart, png) {
            let _ = std::fs::remove_file(&table);
            return Err(IndicatorError::export_failure(&chart, e));
        }
        debug!("rendered {}", chart.display());

        Ok(ExportPaths { table, chart })
    }
}

/// Header `Date,<column labels>`; floats use Rust's shortest round-trip form.
pub fn write_table(frame: &IndicatorFrame, path: &Path) -> std::result::Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(std::iter::once(DATE_HEADER).chain(frame.labels()))?;
    for row in frame.rows() {
        let record = std::iter::once(row.date().format(DATE_FORMAT).to_string())
            .chain(row.values().map(|v| v.to_string()));
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Parse a table written by [`write_table`] back into a frame.
pub fn read_table(path: impl AsRef<Path>) -> anyhow::Result<IndicatorFrame> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let mut names = headers.iter();
    if names.next() != Some(DATE_HEADER) {
        bail!("{}: first column must be '{DATE_HEADER}'", path.display());
    }
    let mut columns: Vec<Column> = names.map(|label| Column { label: label.to_string(), values: Vec::new() }).collect();

    let mut dates = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(0).ok_or_else(|| anyhow!("row {}: empty record", n + 2))?;
        dates.push(NaiveDate::parse_from_str(raw, DATE_FORMAT).with_context(|| format!("row {}: date '{raw}'", n + 2))?);
        for (i, col) in columns.iter_mut().enumerate() {
            let raw = rec.get(i + 1).ok_or_else(|| anyhow!("row {}: missing '{}'", n + 2, col.label))?;
            col.values.push(raw.parse::<f64>().with_context(|| format!("row {}: value '{raw}'", n + 2))?);
        }
    }
    Ok(IndicatorFrame::from_columns(dates, columns)?)
}

/// Every frame column as a line over calendar dates, styled by `study`.
pub fn build_chart(frame: &IndicatorFrame, study: &Study) -> Chart {
    let mut chart = Chart::new().with_title(&study.title);
    for (i, col) in frame.columns().iter().enumerate() {
        let data = frame.dates().iter().map(|d| date_to_x(*d)).zip(col.values.iter().copied()).collect();
        let series = match study.styles.get(i) {
            Some(style) => {
                let s = LineSeries::new(&style.label, data).with_width(style.width);
                match style.color {
                    Some(c) => s.with_color(c),
                    None => s,
                }
            }
            None => LineSeries::new(&col.label, data),
        };
        chart.add_series(series);
    }
    chart.autoscale_axes(0.05);
    chart.x_axis.label = DATE_HEADER.to_string();
    chart.x_axis.format = TickFormat::Date;
    chart
}
