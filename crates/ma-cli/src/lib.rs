// File: crates/ma-cli/src/lib.rs
// Summary: Library side of the `ma-indicator` binary: CLI model, data sources,
// exporters and the fetch -> transform -> export pipeline.

pub mod cli;
pub mod export;
pub mod pipeline;
pub mod source;

pub use cli::{Cli, Command};
pub use export::{read_table, ExportPaths, Exporter, FileExporter, SeriesStyle, Study, StudyKind};
pub use pipeline::{compute_frame, run_indicator, run_price, RunReport};
pub use source::{CsvSource, YahooSource};
