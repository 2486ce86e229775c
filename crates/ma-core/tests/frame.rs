// File: crates/ma-core/tests/frame.rs
// Purpose: Alignment and trim policy for SMA/EMA frames, including the 250-day scenario.

use chrono::{Datelike, NaiveDate, Weekday};
use ma_core::{IndicatorError, IndicatorFrame, IndicatorKind, TimeSeries, Window, PRICE_COLUMN};

/// `n` weekday closes starting 2010-01-04.
fn trading_days(n: usize) -> TimeSeries {
    let mut date = NaiveDate::from_ymd_opt(2010, 1, 4).unwrap();
    let mut pairs = Vec::with_capacity(n);
    while pairs.len() < n {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let i = pairs.len() as f64;
            pairs.push((date, 130.0 + 5.0 * (i / 17.0).sin() + i * 0.02));
        }
        date = date.succ_opt().unwrap();
    }
    TimeSeries::from_pairs(pairs).unwrap()
}

fn frame_for(kind: IndicatorKind, series: &TimeSeries, short: usize, long: usize, warmup_trim: bool) -> IndicatorFrame {
    let (short, long) = (Window::new(short).unwrap(), Window::new(long).unwrap());
    let [short_label, long_label] = kind.column_labels(short, long);
    let short_series = kind.compute(series, short).with_label(short_label);
    let mut long_series = kind.compute(series, long).with_label(long_label);
    if warmup_trim {
        long_series = long_series.without_warmup(long.lookback());
    }
    IndicatorFrame::align(series, &[short_series, long_series]).unwrap()
}

#[test]
fn sma_scenario_keeps_rows_with_full_long_window() {
    let series = trading_days(250);
    let frame = frame_for(IndicatorKind::Sma, &series, 50, 200, false);
    assert_eq!(frame.len(), 250 - 200 + 1);
    assert_eq!(frame.labels().collect::<Vec<_>>(), vec![PRICE_COLUMN, "SMA_50", "SMA_200"]);
    assert_eq!(frame.dates()[0], series.samples()[199].date);
}

#[test]
fn ema_scenario_keeps_every_row() {
    let series = trading_days(250);
    let frame = frame_for(IndicatorKind::Ema, &series, 50, 200, false);
    assert_eq!(frame.len(), 250);
    assert_eq!(frame.labels().collect::<Vec<_>>(), vec![PRICE_COLUMN, "Short EMA", "Long EMA"]);
}

#[test]
fn ema_warmup_trim_matches_sma_row_count() {
    let series = trading_days(250);
    let ema = frame_for(IndicatorKind::Ema, &series, 50, 200, true);
    let sma = frame_for(IndicatorKind::Sma, &series, 50, 200, false);
    assert_eq!(ema.len(), sma.len());
    assert_eq!(ema.dates(), sma.dates());
}

#[test]
fn missing_price_row_is_dropped() {
    let d = |day| NaiveDate::from_ymd_opt(2020, 3, day).unwrap();
    let series = TimeSeries::from_pairs([(d(2), 1.0), (d(3), f64::NAN), (d(4), 3.0), (d(5), 4.0)]).unwrap();
    let frame = frame_for(IndicatorKind::Ema, &series, 1, 2, false);
    assert_eq!(frame.dates(), &[d(2), d(4), d(5)]);
}

#[test]
fn price_only_frame_skips_missing_prices() {
    let d = |day| NaiveDate::from_ymd_opt(2020, 3, day).unwrap();
    let series = TimeSeries::from_pairs([(d(2), 1.0), (d(3), f64::NAN), (d(4), 3.0)]).unwrap();
    let frame = IndicatorFrame::price_only(&series);
    assert_eq!(frame.price(), &[1.0, 3.0]);
    assert_eq!(frame.columns().len(), 1);
}

#[test]
fn misaligned_series_is_rejected() {
    let series = trading_days(10);
    let other = trading_days(12);
    let derived = IndicatorKind::Sma.compute(&other, Window::new(2).unwrap());
    let err = IndicatorFrame::align(&series, &[derived]).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidSeries { .. }));
}

#[test]
fn tail_yields_last_rows_in_order() {
    let series = trading_days(8);
    let frame = frame_for(IndicatorKind::Sma, &series, 2, 3, false);
    let tail: Vec<_> = frame.tail(5).map(|r| r.date()).collect();
    assert_eq!(tail, frame.dates()[frame.len() - 5..].to_vec());
    let row = frame.row(0).unwrap();
    assert_eq!(row.values().count(), 3);
    assert!(frame.row(frame.len()).is_none());
}

#[test]
fn from_columns_validates_shape() {
    let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let ok = IndicatorFrame::from_columns(
        vec![d],
        vec![ma_core::Column { label: PRICE_COLUMN.into(), values: vec![1.0] }],
    );
    assert!(ok.is_ok());
    let bad = IndicatorFrame::from_columns(
        vec![d],
        vec![ma_core::Column { label: "Close".into(), values: vec![1.0] }],
    );
    assert!(bad.is_err());
}
