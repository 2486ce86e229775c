// File: crates/ma-chart/tests/autoscale.rs
// Purpose: Validate autoscale over several line series, with and without gaps.

use ma_chart::{Chart, LineSeries, ViewState};

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(LineSeries::new("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.0, 6.0));
}

#[test]
fn autoscale_pads_y_and_skips_non_finite() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new("gappy", vec![(0.0, 10.0), (1.0, f64::NAN), (2.0, 20.0)]));

    chart.autoscale_axes(0.1);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 2.0));
    assert!((chart.y_axis.min - 9.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 21.0).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_view() {
    let chart = Chart::new();
    let view = ViewState::from_chart(&chart, 0.1);
    assert_eq!(view, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}

#[test]
fn flat_series_gets_nonzero_span() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new("flat", vec![(0.0, 7.0), (3.0, 7.0)]));
    chart.autoscale_axes(0.0);
    assert!(chart.y_axis.max > chart.y_axis.min);
}
