// src/gui/components/mod.rs
pub mod chart;
pub mod data_table;
pub mod export_bar;
pub mod summary_panel;
pub mod toolbar;
