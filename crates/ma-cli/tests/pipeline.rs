// File: crates/ma-cli/tests/pipeline.rs
// Purpose: End-to-end runs over an in-memory source: row counts, written files,
// CSV round-trip and error taxonomy.

use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use ma_chart::RenderOptions;
use ma_cli::{compute_frame, read_table, run_indicator, run_price, FileExporter, StudyKind};
use ma_core::{DataSource, IndicatorError, IndicatorKind, Result, RunConfig, Sample, TimeSeries, Window};

struct MemorySource(TimeSeries);

impl DataSource for MemorySource {
    fn fetch(&self, _symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<TimeSeries> {
        Ok(self.0.between(start, end))
    }
}

/// Always fails; proves validation runs before the fetch.
struct Unreachable;

impl DataSource for Unreachable {
    fn fetch(&self, symbol: &str, _start: NaiveDate, _end: NaiveDate) -> Result<TimeSeries> {
        panic!("fetch called for {symbol}")
    }
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
}

fn closes(n: usize) -> TimeSeries {
    TimeSeries::from_pairs((0..n).map(|i| {
        let t = i as f64;
        (first_day() + Duration::days(i as i64), 130.0 + (t * 0.17).sin() * 6.0 + t * 0.02)
    }))
    .unwrap()
}

fn config(out: &str) -> RunConfig {
    RunConfig::new("IBM", NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        .with_output_dir(out_dir(out))
}

fn out_dir(name: &str) -> PathBuf {
    PathBuf::from("target/test_out").join(name)
}

fn exporter(cfg: &RunConfig) -> FileExporter {
    // small, text-free charts keep the suite fast
    FileExporter::new(&cfg.output_dir)
        .with_render_options(RenderOptions { width: 400, height: 200, draw_labels: false, ..RenderOptions::default() })
}

#[test]
fn sma_run_keeps_rows_with_both_averages() {
    let cfg = config("sma_run");
    let report = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(250)), &exporter(&cfg)).unwrap();

    assert_eq!(report.rows(), 51);
    assert_eq!(report.kind, StudyKind::Indicator(IndicatorKind::Sma));
    let labels: Vec<&str> = report.frame.labels().collect();
    assert_eq!(labels, ["Price", "SMA_50", "SMA_200"]);
    assert_eq!(report.frame.dates()[0], first_day() + Duration::days(199));

    assert_eq!(report.paths.table, out_dir("sma_run").join("IBM_sma_data.csv"));
    assert_eq!(report.paths.chart, out_dir("sma_run").join("IBM_sma_plot.png"));
    assert!(report.paths.table.exists());
    let png = std::fs::read(&report.paths.chart).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn ema_run_keeps_every_row_unless_trimmed() {
    let cfg = config("ema_run");
    let report = run_indicator(IndicatorKind::Ema, &cfg, &MemorySource(closes(250)), &exporter(&cfg)).unwrap();
    assert_eq!(report.rows(), 250);
    let labels: Vec<&str> = report.frame.labels().collect();
    assert_eq!(labels, ["Price", "Short EMA", "Long EMA"]);
    assert!(report.paths.chart.ends_with("IBM_ema_plot.png"));

    let cfg = config("ema_run_trimmed").with_ema_warmup_trim(true);
    let report = run_indicator(IndicatorKind::Ema, &cfg, &MemorySource(closes(250)), &exporter(&cfg)).unwrap();
    assert_eq!(report.rows(), 51);
}

#[test]
fn exported_table_round_trips() {
    let cfg = config("round_trip");
    let report = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(260)), &exporter(&cfg)).unwrap();

    let text = std::fs::read_to_string(&report.paths.table).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Date,Price,SMA_50,SMA_200"));
    assert!(lines.next().unwrap().starts_with("2019-07-19,"));

    let back = read_table(&report.paths.table).unwrap();
    assert_eq!(back.dates(), report.frame.dates());
    assert_eq!(back.labels().collect::<Vec<_>>(), report.frame.labels().collect::<Vec<_>>());
    for (a, b) in back.columns().iter().zip(report.frame.columns()) {
        for (x, y) in a.values.iter().zip(&b.values) {
            assert!((x - y).abs() <= 1e-9, "{x} vs {y}");
        }
    }
}

#[test]
fn empty_source_is_data_unavailable() {
    for kind in [IndicatorKind::Sma, IndicatorKind::Ema] {
        let cfg = config("empty");
        let err = run_indicator(kind, &cfg, &MemorySource(TimeSeries::default()), &exporter(&cfg)).unwrap_err();
        assert!(matches!(err, IndicatorError::DataUnavailable { .. }), "{kind:?}: {err}");
    }
}

#[test]
fn all_missing_closes_are_data_unavailable() {
    let blank = TimeSeries::new(closes(250).samples().iter().map(|s| Sample::new(s.date, f64::NAN)).collect()).unwrap();
    for kind in [IndicatorKind::Sma, IndicatorKind::Ema] {
        let cfg = config("all_missing");
        let err = run_indicator(kind, &cfg, &MemorySource(blank.clone()), &exporter(&cfg)).unwrap_err();
        assert!(matches!(err, IndicatorError::DataUnavailable { .. }), "{kind:?}: {err}");
    }
    let cfg = config("all_missing");
    assert!(matches!(
        run_price(&cfg, &MemorySource(blank), &exporter(&cfg)),
        Err(IndicatorError::DataUnavailable { .. })
    ));
}

#[test]
fn failed_chart_leaves_no_table_behind() {
    let cfg = config("render_failure");
    let _ = std::fs::remove_dir_all(&cfg.output_dir);
    let broken = FileExporter::new(&cfg.output_dir)
        .with_render_options(RenderOptions { width: 0, ..RenderOptions::default() });

    let err = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(250)), &broken).unwrap_err();
    match err {
        IndicatorError::ExportFailure { path, .. } => assert!(path.ends_with("IBM_sma_plot.png")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!cfg.output_dir.join("IBM_sma_data.csv").exists());
}

#[test]
fn short_history_is_insufficient_for_sma() {
    let cfg = config("short_history");
    let err = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(120)), &exporter(&cfg)).unwrap_err();
    assert!(matches!(err, IndicatorError::InsufficientHistory { required: 200, actual: 120 }));

    // EMA is defined from the first price
    let frame = compute_frame(IndicatorKind::Ema, &closes(120), &cfg).unwrap();
    assert_eq!(frame.len(), 120);
}

#[test]
fn gaps_drop_rows_for_both_kinds() {
    let mut samples: Vec<Sample> = closes(30).samples().to_vec();
    samples[10].value = f64::NAN;
    let series = TimeSeries::new(samples).unwrap();
    let cfg = config("gaps").with_windows(Window::new(3).unwrap(), Window::new(5).unwrap());

    // SMA(5): 26 full windows, the gap spoils the five that contain slot 10
    assert_eq!(compute_frame(IndicatorKind::Sma, &series, &cfg).unwrap().len(), 21);
    // EMA: only the gap row itself
    assert_eq!(compute_frame(IndicatorKind::Ema, &series, &cfg).unwrap().len(), 29);
}

#[test]
fn invalid_config_fails_before_fetch() {
    let cfg = config("invalid").with_output_dir(out_dir("invalid"));
    let reversed = RunConfig { start: cfg.end, end: cfg.start, ..cfg.clone() };
    let err = run_indicator(IndicatorKind::Sma, &reversed, &Unreachable, &exporter(&reversed)).unwrap_err();
    assert!(matches!(err, IndicatorError::InvalidConfig { .. }));

    let blank = RunConfig { symbol: String::new(), ..cfg };
    assert!(matches!(run_price(&blank, &Unreachable, &exporter(&blank)), Err(IndicatorError::InvalidConfig { .. })));
}

#[test]
fn unwritable_output_dir_is_export_failure() {
    let blocker = out_dir("blocker_file");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"not a directory").unwrap();

    let cfg = config("unused").with_output_dir(blocker.join("out"));
    let err = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(250)), &exporter(&cfg)).unwrap_err();
    match err {
        IndicatorError::ExportFailure { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn price_study_exports_closes_only() {
    let cfg = config("price");
    let report = run_price(&cfg, &MemorySource(closes(40)), &exporter(&cfg)).unwrap();
    assert_eq!(report.rows(), 40);
    assert_eq!(report.frame.labels().collect::<Vec<_>>(), ["Price"]);
    assert!(report.paths.table.ends_with("IBM_price_data.csv"));
    assert!(report.paths.chart.exists());
}

#[test]
fn summary_lists_last_rows() {
    let cfg = config("summary");
    let report = run_indicator(IndicatorKind::Sma, &cfg, &MemorySource(closes(250)), &exporter(&cfg)).unwrap();
    let text = report.summary(5);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("Date"));
    assert!(lines[5].starts_with(&(first_day() + Duration::days(249)).format("%Y-%m-%d").to_string()));
}
