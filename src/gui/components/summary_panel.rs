// src/gui/components/summary_panel.rs
use eframe::egui::{self, RichText};

use crate::{gui::app::App, present::chart::hex_rgb, config::consts::PREDICTED_COLOR};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.heading("Latest prediction");
    ui.add_space(8.0);

    let view = &app.view;
    if view.predicted_price.is_empty() {
        ui.weak("No prediction loaded");
        return;
    }

    ui.label(RichText::new(&view.target_date).size(15.0));

    let [r, g, b] = hex_rgb(PREDICTED_COLOR).unwrap_or([0xf7, 0x93, 0x1a]);
    ui.label(
        RichText::new(&view.predicted_price)
            .size(32.0)
            .strong()
            .color(egui::Color32::from_rgb(r, g, b)),
    );

    ui.label(RichText::new(&view.model_name).weak());
}
