// File: crates/ma-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG with labels, title and legend.

use chrono::NaiveDate;
use ma_chart::{date_to_x, Chart, LineSeries, RenderOptions, TickFormat};

#[test]
fn render_smoke_png() {
    let first = NaiveDate::from_ymd_opt(2019, 1, 2).unwrap();
    let data: Vec<(f64, f64)> = (0..60)
        .map(|i| {
            let d = first + chrono::Duration::days(i);
            (date_to_x(d), 130.0 + (i as f64 * 0.3).sin() * 4.0)
        })
        .collect();

    let mut chart = Chart::new().with_title("IBM Price with Simple Moving Averages");
    chart.add_series(LineSeries::new("Price", data));
    chart.autoscale_axes(0.05);
    chart.x_axis.format = TickFormat::Date;

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (1200, 600));
}

#[test]
fn render_creates_missing_directories() {
    let mut chart = Chart::new();
    chart.add_series(LineSeries::new("y", vec![(0.0, 1.0), (1.0, 2.0)]));
    chart.autoscale_axes(0.0);

    let out = std::path::PathBuf::from("target/test_out/nested/deeper/chart.png");
    let _ = std::fs::remove_dir_all("target/test_out/nested");
    chart.render_to_png(&RenderOptions::default(), &out).expect("render");
    assert!(out.exists());
}

#[test]
fn rejects_empty_surface() {
    let chart = Chart::new();
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(chart.render_to_rgba8(&opts).is_err());
}
