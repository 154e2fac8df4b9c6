// src/gui/components/mod.rs
pub mod export_bar;
pub mod postings_table;
pub mod salary_chart;
pub mod toolbar;
