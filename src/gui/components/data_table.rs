// src/gui/components/data_table.rs
//
// Draws the history table from the rows the table presenter left in the view.
// Purely a view; row order is the presenter's (newest first).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::TABLE_HEADERS, core::format::PLACEHOLDER, gui::app::App};

/// Initial widths: date, predicted, actual, error, model.
const COLUMN_WIDTHS: [f32; 5] = [110.0, 110.0, 110.0, 80.0, 160.0];
/// Price and error columns are right-aligned.
const NUMERIC: [bool; 5] = [false, true, true, true, false];

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let rows = &app.view.rows;

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let weak = ui.visuals().weak_text_color();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("history_table");
    for (ci, w) in COLUMN_WIDTHS.iter().enumerate() {
        let col = Column::initial(*w).resizable(true).clip(true).at_least(40.0);
        table = table.column(if ci + 1 == COLUMN_WIDTHS.len() { col.at_least(*w) } else { col });
    }

    table
        .header(24.0, |mut header| {
            for (ci, title) in TABLE_HEADERS.iter().enumerate() {
                header.col(|ui| {
                    let text = RichText::new(*title).strong();
                    if NUMERIC[ci] {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for (ci, cell) in data.cells().into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if cell == PLACEHOLDER {
                            rt = rt.color(weak);
                        }
                        if NUMERIC[ci] {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
