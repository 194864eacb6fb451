// src/config/consts.rs

// Source
pub const DEFAULT_SOURCE: &str = "data/predictions.csv";
pub const SOURCE_ENV: &str = "FORECAST_BOARD_SOURCE";
pub const USER_AGENT: &str = concat!("forecast_board/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "predictions";

// Labels
pub const TARGET_LABEL: &str = "Target: ";
pub const MODEL_LABEL: &str = "Model: ";
pub const LOAD_FAILED_TEXT: &str = "Failed to load data";
pub const TABLE_HEADERS: [&str; 5] = ["Target date", "Predicted", "Actual", "Error", "Model"];

// Chart styling (CSS hex)
pub const PREDICTED_COLOR: &str = "#f7931a";
pub const ACTUAL_COLOR: &str = "#c9d1d9";
pub const GRID_COLOR: &str = "#30363d";
pub const TICK_COLOR: &str = "#8b949e";
pub const LEGEND_COLOR: &str = "#c9d1d9";
pub const LINE_TENSION: f32 = 0.1;
