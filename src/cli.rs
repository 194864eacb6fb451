// src/cli.rs
//
// Terminal front-end: load once into a MemoryTarget, then print what the
// presenters wrote. Stdout carries the output; logs go to stderr.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use tracing::info;

use crate::{
    config::{
        consts::{DEFAULT_SOURCE, SOURCE_ENV, TABLE_HEADERS},
        options::{ExportContent, ExportFormat, ExportOptions, ExportType, FailureMode, SourceOptions},
    },
    file,
    pipeline::{self, Loader},
    present::chart::{LineChart, Series},
    render::{MemoryTarget, Region, RenderTarget},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "forecast_board", about = "Print the latest price prediction and its history")]
pub struct Args {
    /// URL (http/https) or path of the predictions CSV
    #[arg(long, short, env = SOURCE_ENV, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Print "Failed to load data" instead of failing quietly
    #[arg(long)]
    pub report_failures: bool,

    /// Also print the chart series
    #[arg(long)]
    pub chart: bool,

    #[arg(long)]
    pub no_table: bool,

    #[arg(long)]
    pub no_summary: bool,

    /// Write the rows to PATH (a folder with --per-model)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub export: Option<PathBuf>,

    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,

    /// CSV/TSV only
    #[arg(long)]
    pub include_headers: bool,

    /// Export the records as read instead of the formatted table
    #[arg(long)]
    pub raw: bool,

    /// One export file per model name
    #[arg(long)]
    pub per_model: bool,
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("Unknown format: {s} (csv, tsv, json)"))
}

impl Args {
    fn regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        if !self.no_summary {
            regions.extend([Region::SummaryDate, Region::SummaryPrice, Region::SummaryModel]);
        }
        if !self.no_table {
            regions.push(Region::HistoryBody);
        }
        if self.chart {
            regions.push(Region::Chart);
        }
        if self.report_failures {
            regions.push(Region::Status);
        }
        regions
    }

    fn source_options(&self) -> SourceOptions {
        SourceOptions {
            location: self.source.clone(),
            failure: if self.report_failures { FailureMode::Report } else { FailureMode::Silent },
        }
    }

    fn export_options(&self, path: &std::path::Path) -> ExportOptions {
        let mut export = ExportOptions::default();
        export.format = self.format;
        export.export_type = if self.per_model { ExportType::PerModel } else { ExportType::SingleFile };
        export.content = if self.raw { ExportContent::Raw } else { ExportContent::Table };
        export.include_headers = self.include_headers;
        export.set_path(&path.to_string_lossy());
        export
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    let loader = Loader::from_options(&args.source_options());
    let mut target = MemoryTarget::with_regions(&args.regions());

    let result = pipeline::run(&loader, &mut target);

    if let Some(status) = target.text(Region::Status) {
        println!("{status}");
    }
    let data = match result {
        Ok(data) => data,
        // quiet mode: nothing printed, nothing to export
        Err(_) if loader.failure() == FailureMode::Silent => return Ok(()),
        Err(e) => return Err(e).wrap_err_with(|| format!("failed to load {}", loader.source())),
    };

    print_summary(&target);
    if target.has_region(Region::HistoryBody) {
        print_table(&target);
    }
    if let Some(chart) = target.chart() {
        print_chart(chart);
    }

    if let Some(path) = &args.export {
        let export = args.export_options(path);
        let written = file::export_dataset(&export, &data)
            .map_err(|e| eyre!("export to {} failed: {e}", path.display()))?;
        info!(count = written.len(), "Export: OK");
        for p in written {
            println!("Wrote {}", p.display());
        }
    }

    Ok(())
}

fn print_summary(target: &MemoryTarget) {
    let lines = [Region::SummaryDate, Region::SummaryPrice, Region::SummaryModel]
        .into_iter()
        .filter_map(|r| target.text(r))
        .collect::<Vec<_>>();
    if lines.is_empty() {
        return;
    }
    for line in lines {
        println!("{line}");
    }
    println!();
}

fn print_table(target: &MemoryTarget) {
    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &target.rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}", w = *w))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    };

    line(&TABLE_HEADERS);
    for row in &target.rows {
        line(&row.cells());
    }
}

fn series_line(series: &Series) -> String {
    let values: Vec<String> = series
        .points
        .iter()
        .map(|p| match p {
            Some(v) => format!("{v}"),
            None => s!("-"),
        })
        .collect();
    format!("{}: {}", series.label, values.join(", "))
}

fn print_chart(chart: &LineChart) {
    println!();
    println!("Dates: {}", chart.labels.join(", "));
    for series in chart.series() {
        println!("{}", series_line(series));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_regions_skip_chart_and_status() {
        let args = Args::parse_from(["cli"]);
        let regions = args.regions();
        assert!(regions.contains(&Region::HistoryBody));
        assert!(!regions.contains(&Region::Chart));
        assert!(!regions.contains(&Region::Status));
    }

    #[test]
    fn flags_shape_regions_and_export() {
        let args = Args::parse_from([
            "cli", "--chart", "--no-table", "--report-failures", "--format", "tsv", "--raw",
        ]);
        let regions = args.regions();
        assert!(regions.contains(&Region::Chart));
        assert!(regions.contains(&Region::Status));
        assert!(!regions.contains(&Region::HistoryBody));

        let export = args.export_options(std::path::Path::new("out/p.tsv"));
        assert_eq!(export.format, ExportFormat::Tsv);
        assert_eq!(export.content, ExportContent::Raw);
        assert_eq!(export.out_path(), PathBuf::from("out/p.tsv"));
    }

    #[test]
    fn gaps_print_as_dash() {
        let s = Series {
            label: s!("Actual"),
            points: vec![Some(1.5), None],
            border_color: "#000000",
            tension: 0.1,
        };
        assert_eq!(series_line(&s), "Actual: 1.5, -");
    }
}
