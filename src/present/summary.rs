// src/present/summary.rs
use tracing::debug;

use crate::{
    config::consts::{MODEL_LABEL, TARGET_LABEL},
    core::format::currency_grouped,
    pipeline::Dataset,
    render::{Region, RenderTarget},
};

/// Show the most recent prediction (index 0 of the descending dataset).
/// An empty dataset leaves the regions as they were.
pub fn update_summary<T: RenderTarget + ?Sized>(data: &Dataset, target: &mut T) {
    let Some(latest) = data.latest() else {
        debug!("Summary: empty dataset, nothing to show");
        return;
    };

    if target.accepts(Region::SummaryDate) {
        target.set_text(Region::SummaryDate, &join!(TARGET_LABEL, latest.target_date()));
    }
    if target.accepts(Region::SummaryPrice) {
        target.set_text(Region::SummaryPrice, &currency_grouped(latest.predicted()));
    }
    if target.accepts(Region::SummaryModel) {
        target.set_text(Region::SummaryModel, &join!(MODEL_LABEL, latest.model_name()));
    }
}
