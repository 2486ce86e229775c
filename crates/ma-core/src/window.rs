// File: crates/ma-core/src/window.rs
// Summary: Positive lookback parameter shared by SMA windows and EMA spans.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{IndicatorError, Result};

/// Number of trailing samples (SMA) or smoothing span (EMA).
/// Contract: always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Window(NonZeroUsize);

impl Window {
    /// Validate a raw window size; zero is rejected.
    pub fn new(size: usize) -> Result<Self> {
        Self::named("window", size)
    }

    /// Like [`Window::new`], naming the parameter in the error (e.g. "long window").
    pub fn named(name: &str, size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| IndicatorError::invalid_window(name, size))
    }

    pub(crate) const fn literal(size: usize) -> Self {
        match NonZeroUsize::new(size) {
            Some(n) => Self(n),
            None => panic!("window literal must be non-zero"),
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Leading samples without a full window: `size - 1`.
    #[inline]
    pub const fn lookback(self) -> usize {
        self.0.get() - 1
    }

    /// EMA decay factor for this span: `2 / (span + 1)`.
    #[inline]
    pub fn alpha(self) -> f64 {
        2.0 / (self.0.get() as f64 + 1.0)
    }
}

impl TryFrom<usize> for Window {
    type Error = IndicatorError;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        let err = Window::named("short window", 0).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidWindow { ref name, value: 0 } if name == "short window"));
    }

    #[test]
    fn alpha_and_lookback() {
        let w = Window::new(1).unwrap();
        assert_eq!(w.alpha(), 1.0);
        assert_eq!(w.lookback(), 0);

        let w = Window::try_from(200).unwrap();
        assert_eq!(w.lookback(), 199);
        assert!((w.alpha() - 2.0 / 201.0).abs() < 1e-15);
    }
}
