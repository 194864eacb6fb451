// src/core/mod.rs

pub mod format;
pub mod net;
pub mod sanitize;
