// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use tracing::{debug, info};

use crate::{
    config::{options::AppOptions, state::AppState},
    pipeline::{self, Dataset, LoadError, Loader},
};

use super::view::DashboardView;

pub fn run(options: eframe::NativeOptions, app_options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Forecast Board",
        options,
        Box::new(|cc| Ok(Box::new(App::new(AppState::new(app_options), &cc.egui_ctx)))),
    )?;
    Ok(())
}

/// A finished load, handed from a worker to the UI thread.
pub type Completed = (Loader, Result<Dataset, LoadError>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // what the presenters last wrote
    pub view: DashboardView,

    // dataset behind the view (for export/copy and re-presenting)
    pub data: Option<Dataset>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,

    // finished loads waiting to be presented, oldest first
    pub completed: Arc<Mutex<Vec<Completed>>>,
    pub in_flight: usize,
}

impl App {
    pub fn new(state: AppState, ctx: &egui::Context) -> Self {
        let mut app = Self {
            state,
            view: DashboardView::default(),
            data: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            completed: Arc::new(Mutex::new(Vec::new())),
            in_flight: 0,
        };

        info!(source = %app.state.options.source.location, "Init: initial load");
        super::actions::load(&mut app, ctx);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Present every load that finished since the last frame.
    /// Later completions overwrite earlier ones.
    fn drain_completed(&mut self) {
        let done: Vec<Completed> = match self.completed.lock() {
            Ok(mut q) => std::mem::take(&mut *q),
            Err(_) => return,
        };

        for (loader, result) in done {
            self.in_flight = self.in_flight.saturating_sub(1);
            match result {
                Ok(data) => {
                    pipeline::present_all(&data, &mut self.view);
                    self.view.load_status = None;
                    self.status(format!("Loaded {} prediction(s)", data.len()));
                    self.data = Some(data);
                }
                Err(e) => {
                    loader.report_failure(&e, &mut self.view);
                    // Silent mode: drop the "Loading…" line, say nothing else
                    self.status(if self.data.is_some() { "Ready" } else { "Idle" });
                }
            }
        }
    }

    /// Re-run presenters over the current dataset (after a layout change).
    pub fn rebuild_view(&mut self) {
        if let Some(data) = &self.data {
            debug!(records = data.len(), "View: rebuild");
            pipeline::present_all(data, &mut self.view);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_completed();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            super::components::toolbar::draw(ui, self);
        });

        if self.view.layout.summary {
            egui::SidePanel::left("summary")
                .resizable(false)
                .min_width(220.0)
                .show(ctx, |ui| {
                    super::components::summary_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.view.layout.chart {
                let h = ui.available_height() * self.state.gui.chart_fraction;
                super::components::chart::draw(ui, self, h);
                ui.separator();
            }

            super::components::export_bar::draw(ui, self);

            if self.view.layout.table {
                ui.separator();
                super::components::data_table::draw(ui, self);
            }
        });
    }
}
