// File: crates/ma-cli/src/cli.rs
// Summary: Command-line model (clap derive) and its mapping onto a run.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::warn;
use ma_chart::{theme, RenderOptions};
use ma_core::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SYMBOL};
use ma_core::{DataSource, IndicatorError, IndicatorKind, Result, RunConfig, Window};

use crate::export::FileExporter;
use crate::pipeline::{run_indicator, run_price, RunReport};
use crate::source::{CsvSource, YahooSource};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Moving-average studies of daily closing prices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Price with short and long simple moving averages.
    Sma(RunArgs),
    /// Price with short and long exponential moving averages.
    Ema(EmaArgs),
    /// Closing prices only.
    Price(RunArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Yahoo Finance chart API.
    Yahoo,
    /// Local CSV file given by --input.
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[arg(long, default_value = DEFAULT_SYMBOL)]
    pub symbol: String,

    /// First date included (YYYY-MM-DD).
    #[arg(long, default_value = "2010-01-01")]
    pub start: NaiveDate,

    /// First date excluded (YYYY-MM-DD).
    #[arg(long, default_value = "2020-01-01")]
    pub end: NaiveDate,

    #[arg(long, default_value_t = 50)]
    pub short: usize,

    #[arg(long, default_value_t = 200)]
    pub long: usize,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceKind::Yahoo)]
    pub source: SourceKind,

    /// CSV file for `--source csv`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Chart theme: light, bmh or dark.
    #[arg(long, default_value = "light")]
    pub theme: String,

    #[arg(long, default_value_t = 1200)]
    pub width: i32,

    #[arg(long, default_value_t = 600)]
    pub height: i32,
}

#[derive(Args, Debug, Clone)]
pub struct EmaArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Drop the first `long - 1` rows so the table lines up with the SMA study.
    #[arg(long, default_value_t = false)]
    pub ema_warmup_trim: bool,
}

impl RunArgs {
    pub fn to_config(&self) -> Result<RunConfig> {
        let short = Window::named("short window", self.short)?;
        let long = Window::named("long window", self.long)?;
        Ok(RunConfig::new(self.symbol.trim(), self.start, self.end)
            .with_windows(short, long)
            .with_output_dir(&self.output_dir))
    }

    pub fn render_options(&self) -> RenderOptions {
        let theme = theme::find(&self.theme);
        if !theme.name.eq_ignore_ascii_case(&self.theme) {
            warn!("unknown theme '{}', using {}", self.theme, theme.name);
        }
        RenderOptions { width: self.width, height: self.height, theme, ..RenderOptions::default() }
    }

    pub fn open_source(&self) -> Result<Box<dyn DataSource>> {
        match self.source {
            SourceKind::Yahoo => Ok(Box::new(YahooSource::new()?)),
            SourceKind::Csv => {
                let path = self
                    .input
                    .as_ref()
                    .ok_or_else(|| IndicatorError::invalid_config("--source csv needs --input <file>"))?;
                Ok(Box::new(CsvSource::new(path)))
            }
        }
    }

    pub fn exporter(&self) -> FileExporter {
        FileExporter::new(&self.output_dir).with_render_options(self.render_options())
    }
}

impl Cli {
    /// Run the selected study end to end.
    pub fn run(&self) -> Result<RunReport> {
        match &self.command {
            Command::Sma(args) => Self::run_study(Some(IndicatorKind::Sma), args, args.to_config()?),
            Command::Ema(args) => {
                let cfg = args.run.to_config()?.with_ema_warmup_trim(args.ema_warmup_trim);
                Self::run_study(Some(IndicatorKind::Ema), &args.run, cfg)
            }
            Command::Price(args) => Self::run_study(None, args, args.to_config()?),
        }
    }

    // run_indicator/run_price validate `cfg` before fetching; opening a source does no I/O
    fn run_study(kind: Option<IndicatorKind>, args: &RunArgs, cfg: RunConfig) -> Result<RunReport> {
        let source = args.open_source()?;
        let exporter = args.exporter();
        match kind {
            Some(kind) => run_indicator(kind, &cfg, &source, &exporter),
            None => run_price(&cfg, &source, &exporter),
        }
    }
}
