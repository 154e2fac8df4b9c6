// src/data.rs
//! Canonical posting record.
//!
//! This is exactly what lands in the cache artifact: field names are the
//! on-disk keys, `date` serializes as a plain `YYYY-MM-DD` string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    pub date: NaiveDate,
    pub id: String,
    /// Set together with `salary_high_end`, or not at all.
    pub salary_low_end: Option<u32>,
    pub salary_high_end: Option<u32>,
}

impl JobPosting {
    pub fn new(role: impl Into<String>, date: NaiveDate, id: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            date,
            id: id.into(),
            salary_low_end: None,
            salary_high_end: None,
        }
    }

    pub fn with_salary(mut self, range: Option<(u32, u32)>) -> Self {
        self.salary_low_end = range.map(|(lo, _)| lo);
        self.salary_high_end = range.map(|(_, hi)| hi);
        self
    }

    /// Both bounds, or nothing. Order is as extracted and not validated.
    pub fn salary_range(&self) -> Option<(u32, u32)> {
        Some((self.salary_low_end?, self.salary_high_end?))
    }

    pub fn has_salary(&self) -> bool {
        self.salary_range().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JobPosting {
        JobPosting::new(
            "Scientist, Antibody Discovery",
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            "R1234",
        )
        .with_salary(Some((120_000, 150_000)))
    }

    #[test]
    fn serializes_with_plain_date_and_flat_salary_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2023-01-05");
        assert_eq!(json["salary_low_end"], 120_000);
        assert_eq!(json["salary_high_end"], 150_000);
        assert_eq!(json["id"], "R1234");
    }

    #[test]
    fn missing_salary_serializes_as_null() {
        let p = sample().with_salary(None);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json["salary_low_end"].is_null());
        assert!(json["salary_high_end"].is_null());
        assert!(!p.has_salary());
    }

    #[test]
    fn half_a_range_is_no_range() {
        let mut p = sample();
        p.salary_high_end = None;
        assert_eq!(p.salary_range(), None);
    }
}
