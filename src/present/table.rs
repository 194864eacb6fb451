// src/present/table.rs
use serde::Serialize;

use crate::{
    core::format::{currency_fixed, or_placeholder, percent_fixed},
    pipeline::Dataset,
    record::PredictionRecord,
    render::{Region, RenderTarget},
};

/// One formatted history row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub predicted: String,
    pub actual: String,
    pub error: String,
    pub model: String,
}

impl HistoryRow {
    pub fn from_record(r: &PredictionRecord) -> Self {
        Self {
            date: s!(r.target_date()),
            predicted: currency_fixed(r.predicted()),
            actual: or_placeholder(r.actual(), currency_fixed),
            error: or_placeholder(r.pct_error(), percent_fixed),
            model: s!(r.model_name()),
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [&self.date, &self.predicted, &self.actual, &self.error, &self.model]
    }

    pub fn into_cells(self) -> Vec<String> {
        vec![self.date, self.predicted, self.actual, self.error, self.model]
    }
}

/// Formatted rows in dataset order (most recent first).
pub fn history_rows(data: &Dataset) -> Vec<HistoryRow> {
    data.iter().map(HistoryRow::from_record).collect()
}

/// Replace the history body with one row per record.
pub fn render_history_table<T: RenderTarget + ?Sized>(data: &Dataset, target: &mut T) {
    if !target.accepts(Region::HistoryBody) {
        return;
    }

    target.clear_rows();
    for row in data.iter().map(HistoryRow::from_record) {
        target.append_row(row);
    }
}
