// File: crates/ma-core/src/lib.rs
// Summary: Core library entry point; exports the time series model, moving-average
// transforms, frame alignment and run configuration.

pub mod config;
pub mod ema;
pub mod error;
pub mod frame;
pub mod indicator;
pub mod series;
pub mod sma;
pub mod source;
pub mod window;

pub use config::RunConfig;
pub use ema::ema;
pub use error::{IndicatorError, Result};
pub use frame::{Column, IndicatorFrame, Row, PRICE_COLUMN};
pub use indicator::{Ema, IndicatorKind, MovingAverage, Sma};
pub use series::{DerivedSeries, Sample, TimeSeries};
pub use sma::sma;
pub use source::DataSource;
pub use window::Window;
