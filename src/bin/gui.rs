// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use forecast_board::{
    config::{
        consts::PREDICTED_COLOR,
        options::{AppOptions, SourceOptions},
        state::GuiState,
    },
    gui, log,
    present::chart::hex_rgb,
};

const ICON_SIZE: u32 = 64;

/// Filled disc in the predicted-series color.
fn app_icon() -> IconData {
    let [r, g, b] = hex_rgb(PREDICTED_COLOR).unwrap_or([0xf7, 0x93, 0x1a]);
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 2.0;

    let rgba = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let d = (dx * dx + dy * dy).sqrt();
        // one pixel of antialiasing at the rim
        let alpha = (radius + 0.5 - d).clamp(0.0, 1.0);
        image::Rgba([r, g, b, (alpha * 255.0) as u8])
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    log::init_file();

    let mut app_options = AppOptions { source: SourceOptions::from_env(), ..Default::default() };
    if let Some(location) = std::env::args().nth(1) {
        app_options.source.location = location;
    }

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        tracing::error!(error = %e, "GUI failed");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
