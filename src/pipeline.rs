// src/pipeline.rs
//! Load → normalize → present.
//!
//! ```text
//! Source ──fetch──▶ text ──csv_io──▶ records ──normalize──▶ Dataset
//!                                                   │
//!                     ┌─────────────────┬───────────┴─────┐
//!                     ▼                 ▼                 ▼
//!                  summary            table             chart
//! ```
//!
//! The dataset is built once per load and shared read-only afterwards.
//! Loads are independent: nothing coordinates two loads in flight, and the one
//! that completes last wins, even if it was started first.

use std::{
    cmp::Ordering,
    fmt,
    path::PathBuf,
    sync::Arc,
    thread::{self, JoinHandle},
};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    config::{
        consts::LOAD_FAILED_TEXT,
        options::{FailureMode, SourceOptions},
    },
    core::net::{self, FetchError},
    csv_io,
    present,
    progress::Progress,
    record::PredictionRecord,
    render::{Region, RenderTarget},
};

/* ---------------- Source ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` / `https://` are URLs; `file://` and everything else is a path.
    pub fn parse(location: &str) -> Self {
        let s = location.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(s!(s))
        } else {
            Source::File(PathBuf::from(s.strip_prefix("file://").unwrap_or(s)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(u) => f.write_str(u),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Where the raw text comes from. Swappable for tests.
pub trait Fetch: Send + Sync {
    fn fetch(&self, source: &Source) -> Result<String, FetchError>;
}

/// Network for URLs, filesystem for paths.
pub struct NetFetch;

impl Fetch for NetFetch {
    fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        match source {
            Source::Url(url) => net::http_get(url),
            Source::File(path) => net::read_file(path),
        }
    }
}

impl<F> Fetch for F
where
    F: Fn(&Source) -> Result<String, FetchError> + Send + Sync,
{
    fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        self(source)
    }
}

/* ---------------- Dataset ---------------- */

/// Normalized predictions, most recent target date first.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Arc<[PredictionRecord]>,
}

impl Dataset {
    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent prediction.
    pub fn latest(&self) -> Option<&PredictionRecord> {
        self.records.first()
    }

    /// Oldest first. A reversed view; the dataset keeps its own order.
    pub fn chronological(&self) -> Vec<&PredictionRecord> {
        self.records.iter().rev().collect()
    }
}

/// Newest first; undated records go last. `sort_by` is stable, so equal keys
/// keep file order.
fn newest_first(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Drop records without a target date, then sort descending by calendar date.
pub fn normalize(records: Vec<PredictionRecord>) -> Dataset {
    let total = records.len();
    let mut keyed: Vec<(Option<NaiveDate>, PredictionRecord)> = records
        .into_iter()
        .filter(PredictionRecord::has_target_date)
        .map(|r| (r.target_day(), r))
        .collect();

    let dropped = total - keyed.len();
    let undated = keyed.iter().filter(|(d, _)| d.is_none()).count();
    if dropped > 0 {
        debug!(dropped, "Normalize: rows without target_date skipped");
    }
    if undated > 0 {
        warn!(undated, "Normalize: unparseable target_date, ordered last");
    }

    keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));
    let records: Vec<PredictionRecord> = keyed.into_iter().map(|(_, r)| r).collect();
    Dataset { records: records.into() }
}

/* ---------------- Loader ---------------- */

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Clone)]
pub struct Loader {
    source: Source,
    failure: FailureMode,
    fetcher: Arc<dyn Fetch>,
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("source", &self.source)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

impl Loader {
    pub fn new(source: Source) -> Self {
        Self { source, failure: FailureMode::Silent, fetcher: Arc::new(NetFetch) }
    }

    pub fn from_options(opts: &SourceOptions) -> Self {
        Self::new(Source::parse(&opts.location)).with_failure(opts.failure)
    }

    pub fn with_failure(mut self, failure: FailureMode) -> Self {
        self.failure = failure;
        self
    }

    pub fn with_fetcher(mut self, fetcher: impl Fetch + 'static) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn failure(&self) -> FailureMode {
        self.failure
    }

    pub fn load(&self) -> Result<Dataset, LoadError> {
        self.load_reporting(None)
    }

    /// Fetch, parse and normalize, reporting steps to `progress`.
    pub fn load_reporting(
        &self,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Dataset, LoadError> {
        let source = self.source.to_string();
        if let Some(p) = progress.as_deref_mut() {
            p.begin(&source);
        }

        let result = self.fetcher.fetch(&self.source).map_err(LoadError::from).and_then(|text| {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Parsing {} bytes…", text.len()));
            }
            self.parse(&text)
        });

        if let Some(p) = progress.as_deref_mut() {
            if let Ok(data) = &result {
                p.loaded(data.len());
            }
            p.finish();
        }
        result
    }

    fn parse(&self, text: &str) -> Result<Dataset, LoadError> {
        let parsed = csv_io::parse_records(text)?;
        if !parsed.has_target_date {
            warn!(source = %self.source, "Load: no target_date column, every row will be skipped");
        }
        let data = normalize(parsed.records);
        info!(source = %self.source, records = data.len(), "Load: OK");
        Ok(data)
    }

    /// Load, hand the dataset to `continuation`, then update the summary.
    /// On failure, apply the failure mode and return the error.
    pub fn load_with<T, F>(&self, target: &mut T, continuation: F) -> Result<Dataset, LoadError>
    where
        T: RenderTarget + ?Sized,
        F: FnOnce(&Dataset, &mut T),
    {
        match self.load() {
            Ok(data) => {
                continuation(&data, &mut *target);
                present::update_summary(&data, target);
                Ok(data)
            }
            Err(e) => {
                self.report_failure(&e, target);
                Err(e)
            }
        }
    }

    /// Silent: log at debug and touch nothing. Report: status line only.
    pub fn report_failure<T: RenderTarget + ?Sized>(&self, err: &LoadError, target: &mut T) {
        match self.failure {
            FailureMode::Silent => {
                debug!(source = %self.source, error = %err, "Load: failed, view left as is");
            }
            FailureMode::Report => {
                warn!(source = %self.source, error = %err, "Load: failed");
                if target.accepts(Region::Status) {
                    target.set_text(Region::Status, LOAD_FAILED_TEXT);
                }
            }
        }
    }
}

/* ---------------- Pipeline ---------------- */

/// Run every presenter over `data`.
pub fn present_all<T: RenderTarget + ?Sized>(data: &Dataset, target: &mut T) {
    present::render_history_table(data, target);
    present::render_performance_chart(data, target);
    present::update_summary(data, target);
}

/// The whole page load: fetch, normalize, then table, chart and summary.
pub fn run<T: RenderTarget + ?Sized>(loader: &Loader, target: &mut T) -> Result<Dataset, LoadError> {
    loader.load_with(target, |data, t| {
        present::render_history_table(data, t);
        present::render_performance_chart(data, t);
    })
}

/// Load on a worker thread; `on_complete` runs there once with the result.
pub fn spawn_load<P, F>(loader: Loader, mut progress: P, on_complete: F) -> JoinHandle<()>
where
    P: Progress + Send + 'static,
    F: FnOnce(Result<Dataset, LoadError>) + Send + 'static,
{
    thread::spawn(move || {
        let result = loader.load_reporting(Some(&mut progress));
        on_complete(result);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kinds() {
        assert_eq!(Source::parse("https://x/p.csv"), Source::Url(s!("https://x/p.csv")));
        assert_eq!(Source::parse(" HTTP://x/p.csv "), Source::Url(s!("HTTP://x/p.csv")));
        assert_eq!(Source::parse("file:///tmp/p.csv"), Source::File(PathBuf::from("/tmp/p.csv")));
        assert_eq!(Source::parse("data/p.csv"), Source::File(PathBuf::from("data/p.csv")));
    }

    #[test]
    fn undated_after_dated_in_file_order() {
        let recs = vec![
            PredictionRecord::new("soon", "1"),
            PredictionRecord::new("2024-01-01", "2"),
            PredictionRecord::new("later", "3"),
            PredictionRecord::new("2024-02-01", "4"),
        ];
        let data = normalize(recs);
        let dates: Vec<&str> = data.iter().map(|r| r.target_date()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-01", "soon", "later"]);
    }

    #[test]
    fn chronological_does_not_reorder_dataset() {
        let data = normalize(vec![
            PredictionRecord::new("2024-01-01", "1"),
            PredictionRecord::new("2024-01-03", "3"),
        ]);
        let asc: Vec<&str> = data.chronological().iter().map(|r| r.target_date()).collect();
        assert_eq!(asc, vec!["2024-01-01", "2024-01-03"]);
        assert_eq!(data.latest().map(|r| r.target_date()), Some("2024-01-03"));
    }
}
