// src/present/mod.rs
//! Presenters: each takes the normalized dataset and updates one area of a
//! [`RenderTarget`](crate::render::RenderTarget). They share nothing but the
//! dataset, so their relative order does not matter.

pub mod chart;
pub mod summary;
pub mod table;

pub use chart::render_performance_chart;
pub use summary::update_summary;
pub use table::render_history_table;
