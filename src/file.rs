// src/file.rs

use std::{
    collections::{BTreeMap, HashMap},
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::{
        consts::TABLE_HEADERS,
        options::{ExportContent, ExportOptions, ExportType},
    },
    core::sanitize,
    csv_io::{rows_to_string, write_rows},
    pipeline::Dataset,
    present::table::HistoryRow,
    record::{columns, PredictionRecord},
};

type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Headers + rows as they will be written for a CSV/TSV export.
fn tabular(
    content: ExportContent,
    records: &[&PredictionRecord],
) -> (Vec<String>, Vec<Vec<String>>) {
    match content {
        ExportContent::Table => (
            TABLE_HEADERS.iter().map(|h| s!(*h)).collect(),
            records.iter().map(|r| HistoryRow::from_record(r).into_cells()).collect(),
        ),
        ExportContent::Raw => (
            columns::ALL.iter().map(|h| s!(*h)).collect(),
            records
                .iter()
                .map(|r| columns::ALL.iter().map(|c| s!(r.field(c).unwrap_or(""))).collect())
                .collect(),
        ),
    }
}

fn to_json(content: ExportContent, records: &[&PredictionRecord]) -> serde_json::Result<String> {
    match content {
        ExportContent::Table => {
            let rows: Vec<HistoryRow> = records.iter().map(|r| HistoryRow::from_record(r)).collect();
            serde_json::to_string_pretty(&rows)
        }
        ExportContent::Raw => serde_json::to_string_pretty(records),
    }
}

/// Render `records` into the export text for the chosen format.
pub fn to_export_string(export: &ExportOptions, records: &[&PredictionRecord]) -> BoxResult<String> {
    match export.delimiter() {
        Some(sep) => {
            let (headers, rows) = tabular(export.content, records);
            let headers = export.include_headers.then_some(headers.as_slice());
            Ok(rows_to_string(headers, &rows, sep))
        }
        None => Ok(to_json(export.content, records)?),
    }
}

/// Stream `records` to `path` (no intermediate String).
pub fn write_records_to_path(
    path: &Path,
    export: &ExportOptions,
    records: &[&PredictionRecord],
) -> BoxResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite

    match export.delimiter() {
        Some(sep) => {
            let (headers, rows) = tabular(export.content, records);
            let headers = export.include_headers.then_some(headers.as_slice());
            write_rows(&mut out, headers, &rows, sep)?;
        }
        None => {
            out.write_all(to_json(export.content, records)?.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Export the dataset per `export`. Returns every path written.
pub fn export_dataset(export: &ExportOptions, data: &Dataset) -> BoxResult<Vec<PathBuf>> {
    match export.export_type {
        ExportType::SingleFile => {
            let path = export.out_path();
            let records: Vec<&PredictionRecord> = data.iter().collect();
            write_records_to_path(&path, export, &records)?;
            Ok(vec![path])
        }
        ExportType::PerModel => write_export_per_model(export, data),
    }
}

/// One file per model name in the directory given by `export.out_path()`.
/// Row order within each file follows the dataset (newest first).
fn write_export_per_model(export: &ExportOptions, data: &Dataset) -> BoxResult<Vec<PathBuf>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    // BTreeMap: files are written in a stable order
    let mut by_model: BTreeMap<&str, Vec<&PredictionRecord>> = BTreeMap::new();
    for r in data.iter() {
        by_model.entry(r.model_name()).or_default().push(r);
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(by_model.len());
    let ext = export.format.ext();

    for (model, records) in by_model {
        let stem = sanitize::file_stem(model, "model");
        let path = resolve_filename(&outdir, &stem, &mut seen, ext);
        write_records_to_path(&path, export, &records)?;
        written.push(path);
    }

    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> BoxResult<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Duplicate handling **only within this run**:
/// first `<stem>.ext`, then `<stem> (2).ext`, `<stem> (3).ext`, …
pub fn resolve_filename(
    dir: &Path,
    stem: &str,
    seen_names: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let count = seen_names.entry(s!(stem)).or_insert(0);

    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;

    #[test]
    fn duplicate_stems_get_counters() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        assert_eq!(resolve_filename(dir, "a", &mut seen, "csv"), dir.join("a.csv"));
        assert_eq!(resolve_filename(dir, "a", &mut seen, "csv"), dir.join("a (2).csv"));
        assert_eq!(resolve_filename(dir, "b", &mut seen, "csv"), dir.join("b.csv"));
    }

    #[test]
    fn json_table_uses_formatted_cells() {
        let r = PredictionRecord::new("2024-01-02", "45000").with_model("ARIMA");
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Json;
        let s = to_export_string(&opts, &[&r]).unwrap();
        assert!(s.contains("\"predicted\": \"$45000.00\""));
        assert!(s.contains("\"actual\": \"-\""));
    }
}
