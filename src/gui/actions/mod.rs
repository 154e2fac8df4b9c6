// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, export, report, scrape}.

mod export;  // src/gui/actions/export.rs
mod report;  // src/gui/actions/report.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use export::{copy, export};
pub use report::report;
pub use scrape::scrape;

use crate::{gui::app::App, report::table::SalaryRow};

/// Table rows in the order the chart shows them.
#[inline]
pub(super) fn current_rows(app: &App) -> Vec<SalaryRow> {
    crate::report::chart_rows(&app.postings, &app.state.options.report)
}
