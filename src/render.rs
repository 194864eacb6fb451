// src/render.rs
//! Render targets.
//!
//! Presenters never reach for a window, a terminal or a document directly. They
//! write through a [`RenderTarget`], which maps a logical [`Region`] to whatever
//! the front-end uses to show it. A target that lacks a region simply reports
//! so, and the presenter for that region does nothing. Partial layouts (a table
//! without a chart, a summary without a table) need no special casing.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::present::{chart::LineChart, table::HistoryRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    SummaryDate,
    SummaryPrice,
    SummaryModel,
    HistoryBody,
    Chart,
    Status,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::SummaryDate,
        Region::SummaryPrice,
        Region::SummaryModel,
        Region::HistoryBody,
        Region::Chart,
        Region::Status,
    ];

    /// Stable identifier, e.g. for logs.
    pub fn id(self) -> &'static str {
        match self {
            Region::SummaryDate => "target-date",
            Region::SummaryPrice => "predicted-price",
            Region::SummaryModel => "model-name",
            Region::HistoryBody => "history-table",
            Region::Chart => "performance-chart",
            Region::Status => "status",
        }
    }
}

pub trait RenderTarget {
    /// Whether this target has somewhere to put `region`.
    fn has_region(&self, region: Region) -> bool;

    /// `has_region`, noting a skipped write in the debug log.
    fn accepts(&self, region: Region) -> bool {
        let present = self.has_region(region);
        if !present {
            debug!(region = region.id(), "Render: region absent, write skipped");
        }
        present
    }

    /// Replace the text of a text region.
    fn set_text(&mut self, region: Region, text: &str);

    /// Remove all rows from the history body.
    fn clear_rows(&mut self);

    fn append_row(&mut self, row: HistoryRow);

    /// Create a chart in the chart region.
    fn draw_chart(&mut self, chart: LineChart);
}

/// Headless target: records everything written to it.
#[derive(Clone, Debug, Default)]
pub struct MemoryTarget {
    regions: BTreeSet<Region>,
    pub texts: BTreeMap<Region, String>,
    pub rows: Vec<HistoryRow>,
    pub charts: Vec<LineChart>,
    /// Total writes of any kind, including clears.
    pub writes: usize,
}

impl MemoryTarget {
    /// A target with every region present.
    pub fn full() -> Self {
        Self::with_regions(&Region::ALL)
    }

    pub fn with_regions(regions: &[Region]) -> Self {
        Self { regions: regions.iter().copied().collect(), ..Self::default() }
    }

    pub fn without(mut self, region: Region) -> Self {
        self.regions.remove(&region);
        self
    }

    pub fn text(&self, region: Region) -> Option<&str> {
        self.texts.get(&region).map(String::as_str)
    }

    /// Most recently created chart.
    pub fn chart(&self) -> Option<&LineChart> {
        self.charts.last()
    }
}

impl RenderTarget for MemoryTarget {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    fn set_text(&mut self, region: Region, text: &str) {
        self.writes += 1;
        self.texts.insert(region, s!(text));
    }

    fn clear_rows(&mut self) {
        self.writes += 1;
        self.rows.clear();
    }

    fn append_row(&mut self, row: HistoryRow) {
        self.writes += 1;
        self.rows.push(row);
    }

    fn draw_chart(&mut self, chart: LineChart) {
        self.writes += 1;
        self.charts.push(chart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ids_are_distinct() {
        let ids: BTreeSet<&str> = Region::ALL.iter().map(|r| r.id()).collect();
        assert_eq!(ids.len(), Region::ALL.len());
        assert_eq!(Region::Chart.id(), "performance-chart");
    }

    #[test]
    fn accepts_follows_present_regions() {
        let t = MemoryTarget::full().without(Region::Chart);
        assert!(!t.accepts(Region::Chart));
        assert!(t.accepts(Region::HistoryBody));
        assert_eq!(t.writes, 0);
    }
}
