// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv_io;
pub mod dates;
pub mod file;
pub mod log;
pub mod pipeline;
pub mod present;
pub mod progress;
pub mod record;
pub mod render;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use pipeline::{Dataset, LoadError, Loader, Source};
pub use record::PredictionRecord;
pub use render::{MemoryTarget, Region, RenderTarget};
