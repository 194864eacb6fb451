// src/gui/view.rs
//
// The window's render target. Presenters write here; components read it back
// every frame. Which regions exist follows the layout toggles.

use crate::{
    present::{chart::LineChart, table::HistoryRow},
    render::{Region, RenderTarget},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub summary: bool,
    pub chart: bool,
    pub table: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self { summary: true, chart: true, table: true }
    }
}

#[derive(Default)]
pub struct DashboardView {
    pub layout: Layout,

    pub target_date: String,
    pub predicted_price: String,
    pub model_name: String,
    /// Load failure line (report mode only).
    pub load_status: Option<String>,

    pub rows: Vec<HistoryRow>,
    pub chart: Option<LineChart>,
}

impl RenderTarget for DashboardView {
    fn has_region(&self, region: Region) -> bool {
        match region {
            Region::SummaryDate | Region::SummaryPrice | Region::SummaryModel => self.layout.summary,
            Region::HistoryBody => self.layout.table,
            Region::Chart => self.layout.chart,
            Region::Status => true,
        }
    }

    fn set_text(&mut self, region: Region, text: &str) {
        let slot = match region {
            Region::SummaryDate => &mut self.target_date,
            Region::SummaryPrice => &mut self.predicted_price,
            Region::SummaryModel => &mut self.model_name,
            Region::Status => {
                self.load_status = Some(s!(text));
                return;
            }
            Region::HistoryBody | Region::Chart => return,
        };
        *slot = s!(text);
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: HistoryRow) {
        self.rows.push(row);
    }

    fn draw_chart(&mut self, chart: LineChart) {
        self.chart = Some(chart);
    }
}
