// src/config/options.rs
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/// What to do when the dataset cannot be fetched or parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailureMode {
    /// Leave every region untouched; only the debug log knows.
    #[default]
    Silent,
    /// Write a "failed to load" line into the status region.
    Report,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// URL (http/https) or local path of the predictions file.
    pub location: String,
    pub failure: FailureMode,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { location: s!(DEFAULT_SOURCE), failure: FailureMode::Silent }
    }
}

impl SourceOptions {
    /// Defaults, with the location overridable from the environment.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(loc) = std::env::var(SOURCE_ENV) {
            if !loc.trim().is_empty() {
                opts.location = s!(loc.trim());
            }
        }
        opts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    /// One file per model name.
    PerModel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Which rows go out: the formatted history table, or the records as read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportContent {
    Table,
    Raw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub content: ExportContent,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            content: ExportContent::Table,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// File path for single-file export; directory for per-model export.
    pub fn out_path(&self) -> PathBuf {
        match self.export_type {
            ExportType::SingleFile => {
                let file_name = self.out_path.file_name(self.format.ext());
                Self::join_dir_and_filename(&self.out_path.dir, &file_name)
            }
            ExportType::PerModel => self.out_path.dir.clone(),
        }
    }

    /// Parse user text into dir + file name. A typed extension is kept and
    /// wins over the format's default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.user_ext = p.extension().map(OsStr::to_os_string);
            }
            ExportType::PerModel => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn delimiter(&self) -> Option<u8> {
        self.format.delimiter()
    }

    pub fn join_dir_and_filename(dir: &Path, file_name: &OsStr) -> PathBuf {
        if dir.as_os_str().is_empty() {
            PathBuf::from(file_name)
        } else {
            dir.join(file_name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    user_ext: Option<OsString>,
}

impl OutputPath {
    fn file_name(&self, default_ext: &str) -> OsString {
        let mut name = self.file_stem.clone();
        name.push(".");
        match &self.user_ext {
            Some(ext) => name.push(ext),
            None => name.push(default_ext),
        }
        name
    }
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
