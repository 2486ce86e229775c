// File: crates/ma-core/src/error.rs
// Summary: Error taxonomy shared by the transforms, data sources and exporters.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error carried as the cause of an export failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure a run can surface. All variants abort the run; none are retried.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The source could not deliver prices (network failure, unknown symbol,
    /// malformed payload) or delivered no rows for the requested range.
    #[error("data unavailable for '{symbol}': {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// The longest requested window needs more samples than the series holds,
    /// or alignment left no fully-defined rows.
    #[error("insufficient history: required {required} samples, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// Writing the table or the chart failed.
    #[error("failed to export '{}': {source}", .path.display())]
    ExportFailure {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A window or span of zero.
    #[error("invalid {name} {value}: must be a positive integer")]
    InvalidWindow { name: String, value: usize },

    /// Configuration rejected before any I/O took place.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Samples out of order, duplicated, or misaligned with their source.
    #[error("invalid series: {reason}")]
    InvalidSeries { reason: String },
}

impl IndicatorError {
    pub fn data_unavailable(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable { symbol: symbol.into(), reason: reason.into() }
    }

    pub fn insufficient_history(required: usize, actual: usize) -> Self {
        Self::InsufficientHistory { required, actual }
    }

    pub fn export_failure(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::ExportFailure { path: path.into(), source: source.into() }
    }

    pub fn invalid_window(name: impl Into<String>, value: usize) -> Self {
        Self::InvalidWindow { name: name.into(), value }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }

    pub fn invalid_series(reason: impl Into<String>) -> Self {
        Self::InvalidSeries { reason: reason.into() }
    }
}

/// Result alias used throughout the indicator crates.
pub type Result<T> = std::result::Result<T, IndicatorError>;
