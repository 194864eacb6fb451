// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Source text box contents; applied to options on Refresh.
    pub source_text: String,

    /// Export path text box contents.
    pub out_path_text: String,
    pub out_path_dirty: bool,

    /// Height share of the chart above the table.
    pub chart_fraction: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            source_text: s!(),
            out_path_text: s!(),
            out_path_dirty: false,
            chart_fraction: 0.45,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            source_text: options.source.location.clone(),
            out_path_text: options.export.out_path().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
