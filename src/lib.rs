// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::JobPosting;
pub use error::{Error, MarkupError, Result};
