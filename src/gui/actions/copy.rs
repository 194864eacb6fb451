// src/gui/actions/copy.rs
use eframe::egui;
use tracing::{debug, error, info};

use crate::{file, gui::app::App, record::PredictionRecord};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(data) = &app.data else {
        debug!("Copy: Clicked, but nothing is loaded");
        app.status("Nothing to copy");
        return;
    };

    let records: Vec<&PredictionRecord> = data.iter().collect();
    match file::to_export_string(&app.state.options.export, &records) {
        Ok(txt) => {
            info!(rows = records.len(), "Copy: to clipboard");
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            error!(error = %e, "Copy: Error");
            app.status(format!("Copy error: {e}"));
        }
    }
}
