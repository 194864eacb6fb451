// src/gui/actions/load.rs
use eframe::egui;
use tracing::info;

use crate::{
    gui::{app::App, progress::GuiProgress},
    pipeline::{self, Loader},
};

/// Start a background load of the configured source.
/// Nothing cancels or orders loads: each one queues its result when done.
pub fn load(app: &mut App, ctx: &egui::Context) {
    let text = app.state.gui.source_text.trim();
    if !text.is_empty() {
        app.state.options.source.location = s!(text);
    }

    let loader = Loader::from_options(&app.state.options.source);
    info!(source = %loader.source(), failure = ?loader.failure(), "Load: begin");

    let progress = GuiProgress::new(app.status.clone(), ctx.clone());
    let completed = app.completed.clone();
    let ctx = ctx.clone();
    let worker_loader = loader.clone();

    app.in_flight += 1;
    pipeline::spawn_load(worker_loader, progress, move |result| {
        if let Ok(mut q) = completed.lock() {
            q.push((loader, result));
        }
        ctx.request_repaint();
    });
}
