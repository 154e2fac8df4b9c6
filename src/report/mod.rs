// src/report/mod.rs
//! Salary chart with a benchmark line, written as an interactive HTML page and
//! a fixed-size PNG. Both outputs are overwritten on every run.

pub mod chart;
pub mod font;
pub mod html;
pub mod raster;
pub mod table;

use std::path::PathBuf;

use crate::config::options::ReportOptions;
use crate::data::JobPosting;
use crate::error::Result;
use crate::file::write_output;

use self::chart::Chart;
use self::table::{SalaryRow, order_for, salary_rows};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub png: PathBuf,
}

/// Rows in the order the configured style draws them.
pub fn chart_rows(postings: &[JobPosting], opts: &ReportOptions) -> Vec<SalaryRow> {
    let mut rows = salary_rows(postings);
    order_for(opts.style, &mut rows);
    rows
}

pub fn build_chart(rows: &[SalaryRow], opts: &ReportOptions) -> Chart {
    chart::layout(
        rows,
        opts.benchmark,
        opts.style,
        opts.width as f32,
        opts.height as f32,
        &opts.title,
    )
}

pub fn write_report(postings: &[JobPosting], opts: &ReportOptions) -> Result<ReportPaths> {
    let rows = chart_rows(postings, opts);
    if rows.is_empty() {
        tracing::warn!("Report: no posting discloses a salary; chart has only the benchmark");
    }
    let chart = build_chart(&rows, opts);

    let paths = ReportPaths { html: opts.html_path(), png: opts.png_path() };
    write_output(&paths.html, html::document(&chart, &rows).as_bytes())?;
    raster::write_png(&chart, &paths.png)?;

    tracing::info!(
        "Report: {} role(s), benchmark {} → {} + {}",
        rows.len(),
        opts.benchmark,
        paths.html.display(),
        paths.png.display()
    );
    Ok(paths)
}
