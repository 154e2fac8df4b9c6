// src/report/table.rs
//! Postings → `(role, low, high)` rows.
//!
//! Pure projection; charting and export both start here.

use std::cmp::Reverse;

use crate::config::options::ChartStyle;
use crate::data::JobPosting;

pub const TABLE_HEADERS: [&str; 3] = ["Role", "Low End", "High End"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SalaryRow {
    pub role: String,
    pub low: u32,
    pub high: u32,
}

impl SalaryRow {
    pub fn cells(&self) -> Vec<String> {
        vec![self.role.clone(), self.low.to_string(), self.high.to_string()]
    }
}

/// Rows for postings that disclose a salary, in collection order.
pub fn salary_rows(postings: &[JobPosting]) -> Vec<SalaryRow> {
    postings
        .iter()
        .filter_map(|p| {
            let (low, high) = p.salary_range()?;
            Some(SalaryRow { role: p.role.clone(), low, high })
        })
        .collect()
}

/// Grouped bars list the best-paid low end first; boxes climb left to right.
/// Stable, so equal low ends keep collection order.
pub fn order_for(style: ChartStyle, rows: &mut [SalaryRow]) {
    match style {
        ChartStyle::GroupedBar => rows.sort_by_key(|r| Reverse(r.low)),
        ChartStyle::Box => rows.sort_by_key(|r| r.low),
    }
}
