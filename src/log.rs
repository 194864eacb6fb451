// src/log.rs
//
// tracing setup. Lines carry time since start, like
// `0.512s  INFO forecast_board::pipeline: Load: OK records=42`.
// RUST_LOG overrides the default `info` filter.

use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to `.store/debug.log` (GUI: there is no console to read).
/// Falls back to stderr if the file cannot be opened.
pub fn init_file() {
    let path = Path::new(STORE_DIR).join(LOG_FILE);
    let file = fs::create_dir_all(STORE_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => {
            init_stderr();
            tracing::warn!(path = %path.display(), error = %e, "Log: file unavailable, using stderr");
        }
    }
}

/// Log to stderr, keeping stdout clean for CLI output.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_timer(Uptime::default())
        .with_writer(io::stderr)
        .try_init();
}
