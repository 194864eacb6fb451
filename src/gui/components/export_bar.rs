// src/gui/components/export_bar.rs

use eframe::egui;
use tracing::debug;

use crate::{
    config::options::{
        ExportContent, ExportFormat,
        ExportType::{PerModel, SingleFile},
    },
    gui::{actions, app::App},
};

fn refresh_out_path_text(app: &mut App) {
    if !app.state.gui.out_path_dirty {
        app.state.gui.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Format + Content + Include headers ---
    let prev_fmt = app.state.options.export.format;
    let prev_type = app.state.options.export.export_type;

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");

        ui.separator();

        ui.label("Rows:");
        let before = export.content;
        ui.selectable_value(&mut export.content, ExportContent::Table, "Table");
        ui.selectable_value(&mut export.content, ExportContent::Raw, "Raw");
        if export.content != before {
            debug!(content = ?export.content, "UI: export content");
        }

        ui.separator();

        let headers_allowed = export.format != ExportFormat::Json;
        ui.add_enabled_ui(headers_allowed, |ui| {
            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                debug!(include_headers = export.include_headers, "UI: include headers");
            }
        });

        let mut single = matches!(export.export_type, SingleFile);
        if ui.checkbox(&mut single, "All models in one file").changed() {
            export.export_type = if single { SingleFile } else { PerModel };
        }
    });

    if app.state.options.export.format != prev_fmt || app.state.options.export.export_type != prev_type {
        debug!(
            format = ?app.state.options.export.format,
            export_type = ?app.state.options.export.export_type,
            "UI: export target"
        );
        refresh_out_path_text(app);
    }

    // --- Output field + Actions ---
    ui.horizontal(|ui| {
        let label = match app.state.options.export.export_type {
            SingleFile => "Output file:",
            PerModel => "Output folder:",
        };
        ui.label(label);
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(320.0),
            )
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            debug!(text = %app.state.gui.out_path_text, "UI: out path edited");
        }

        let has_data = app.data.as_ref().is_some_and(|d| !d.is_empty());
        ui.add_enabled_ui(has_data, |ui| {
            if ui.button("Copy").clicked() {
                actions::copy(app, ui.ctx());
            }
            if ui.button("Export").clicked() {
                actions::export(app);
            }
        });
    });
}
