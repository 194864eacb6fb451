// src/gui/components/toolbar.rs
//
// Source field, Refresh, layout toggles and the status line.

use eframe::egui;
use tracing::debug;

use crate::{config::options::FailureMode, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Source:");
        let edit = egui::TextEdit::singleline(&mut app.state.gui.source_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(360.0);
        let resp = ui.add(edit);
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Refresh").clicked() || submitted {
            crate::gui::actions::load(app, ui.ctx());
        }

        let mut report = app.state.options.source.failure == FailureMode::Report;
        if ui
            .checkbox(&mut report, "Show load errors")
            .on_hover_text("Off: a failed load leaves the view as it was")
            .changed()
        {
            app.state.options.source.failure =
                if report { FailureMode::Report } else { FailureMode::Silent };
            debug!(failure = ?app.state.options.source.failure, "UI: failure mode");
        }

        ui.separator();

        let before = app.view.layout;
        ui.checkbox(&mut app.view.layout.summary, "Summary");
        ui.checkbox(&mut app.view.layout.chart, "Chart");
        ui.checkbox(&mut app.view.layout.table, "Table");
        if app.view.layout != before {
            debug!(layout = ?app.view.layout, "UI: layout");
            app.rebuild_view();
        }
    });

    ui.horizontal(|ui| {
        if app.in_flight > 0 {
            ui.spinner();
        }
        ui.label(format!("Status: {}", app.status_text()));
        if let Some(err) = &app.view.load_status {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
    });
}
