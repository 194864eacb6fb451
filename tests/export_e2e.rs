// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use forecast_board::config::options::{AppOptions, ExportContent, ExportFormat, ExportType};
use forecast_board::file::export_dataset;
use forecast_board::pipeline::normalize;
use forecast_board::{Dataset, PredictionRecord};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("forecast_board_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Dataset {
    normalize(vec![
        PredictionRecord::new("2024-01-01", "44000").with_model("ARIMA"),
        PredictionRecord::new("2024-01-02", "45000")
            .with_actual("44500")
            .with_error("-1.11")
            .with_model("ARIMA"),
        PredictionRecord::new("2024-01-02", "45100").with_model("LSTM/v2"),
    ])
}

#[test]
fn single_file_with_headers() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("headers");
    opts.export.set_path(dir.join("table.csv").to_str().unwrap());
    opts.export.include_headers = true;

    let written = export_dataset(&opts.export, &sample()).unwrap();
    assert_eq!(written.len(), 1);

    let text = fs::read_to_string(&written[0]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Target date,Predicted,Actual,Error,Model");
    assert_eq!(lines[1], "2024-01-02,$45000.00,$44500.00,-1.11%,ARIMA");
    assert_eq!(lines.len(), 4);
}

#[test]
fn headers_left_out_unless_asked() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("no_headers");
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path(dir.join("table").to_str().unwrap());

    let written = export_dataset(&opts.export, &sample()).unwrap();
    assert!(written[0].to_string_lossy().ends_with("table.tsv"));

    let text = fs::read_to_string(&written[0]).unwrap();
    assert!(!text.contains("Target date"));
    assert_eq!(text.lines().next(), Some("2024-01-02\t$45000.00\t$44500.00\t-1.11%\tARIMA"));
}

#[test]
fn user_extension_survives_format_change() {
    let mut opts = AppOptions::default();
    let dir = tmp_dir("ext");
    opts.export.set_path(dir.join("hello.txt").to_str().unwrap());
    opts.export.format = ExportFormat::Tsv;

    let written = export_dataset(&opts.export, &sample()).unwrap();
    assert!(written[0].to_string_lossy().ends_with("hello.txt"));
}

#[test]
fn per_model_writes_one_file_each() {
    let mut opts = AppOptions::default();
    opts.export.export_type = ExportType::PerModel;
    let dir = tmp_dir("per_model");
    opts.export.set_path(dir.to_str().unwrap());

    let written = export_dataset(&opts.export, &sample()).unwrap();
    assert_eq!(written.len(), 2);
    for p in &written {
        assert!(p.exists(), "missing {}", p.display());
        assert_eq!(p.parent(), Some(dir.as_path()));
    }

    let arima = written.iter().find(|p| p.to_string_lossy().ends_with("ARIMA.csv")).unwrap();
    let text = fs::read_to_string(arima).unwrap();
    // header + two ARIMA rows, newest first
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("2024-01-02,"));
    assert!(lines[2].starts_with("2024-01-01,"));
}

#[test]
fn json_raw_round_trips_records() {
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Json;
    opts.export.content = ExportContent::Raw;
    let dir = tmp_dir("json_raw");
    opts.export.set_path(dir.join("raw").to_str().unwrap());

    let data = sample();
    let written = export_dataset(&opts.export, &data).unwrap();
    let text = fs::read_to_string(&written[0]).unwrap();

    let back: Vec<PredictionRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back.as_slice(), data.records());
}

#[test]
fn raw_csv_keeps_source_columns() {
    let mut opts = AppOptions::default();
    opts.export.content = ExportContent::Raw;
    let dir = tmp_dir("raw_csv");
    opts.export.set_path(dir.join("raw.csv").to_str().unwrap());

    let written = export_dataset(&opts.export, &sample()).unwrap();
    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        text.lines().next(),
        Some("date_generated,target_date,model_name,predicted_close,actual_close,abs_error,pct_error")
    );
    assert_eq!(text.lines().nth(1), Some(",2024-01-02,ARIMA,45000,44500,,-1.11"));
}
