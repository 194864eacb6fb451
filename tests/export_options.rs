// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};

use forecast_board::config::options::{ExportFormat, ExportOptions, ExportType};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_ext_follows_format() {
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    assert!(opts.out_path().to_string_lossy().ends_with("predictions.csv"));

    // nothing typed yet → extension tracks the format
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("predictions.tsv"));
    opts.format = ExportFormat::Json;
    assert!(opts.out_path().to_string_lossy().ends_with("predictions.json"));
}

#[test]
fn format_change_keeps_user_extension() {
    let mut export = ExportOptions::default();
    export.set_path("out/custom.data");

    export.format = ExportFormat::Tsv;
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/custom.data")));
}

#[test]
fn typed_name_without_extension_gets_format_ext() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    export.set_path("  reports/today  ");
    assert_eq!(norm(&export.out_path()), norm(Path::new("reports/today.json")));
}

#[test]
fn blank_text_leaves_path_alone() {
    let mut export = ExportOptions::default();
    let before = export.out_path();
    export.set_path("   ");
    assert_eq!(export.out_path(), before);
}

#[test]
fn per_model_path_is_a_directory() {
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerModel;
    export.set_path("out/by_model");
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/by_model")));

    // switching back keeps the default file name inside the new dir
    export.export_type = ExportType::SingleFile;
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/by_model/predictions.csv")));
}

#[test]
fn bare_file_name_has_no_dir() {
    let p = ExportOptions::join_dir_and_filename(Path::new(""), "a.csv".as_ref());
    assert_eq!(p, PathBuf::from("a.csv"));
}

#[test]
fn format_names_parse_case_insensitively() {
    assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse("tsv"), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::parse("Json"), Some(ExportFormat::Json));
    assert_eq!(ExportFormat::parse("xlsx"), None);
    assert_eq!(ExportFormat::Json.delimiter(), None);
}
