// src/specs/salary.rs
//! Salary disclosure → `(low, high)`.
//!
//! The site discloses pay in a free-text paragraph such as
//! "The hiring range for this position is $120,000 to $150,000 CAD".
//! Amounts are dollar-prefixed and comma-grouped.
//!
//! Arity policy is lenient: fewer than two amounts means "no salary data",
//! more than two uses the first two. The first amount is the low end; the
//! order is trusted, not checked.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config::consts::HIRING_RANGE_PHRASE;
use crate::core::{html, sanitize::strip_amount};

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| html::selector("p"));

static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s?(\d{1,3}(?:,\d{3})+)").unwrap_or_else(|e| panic!("invalid amount regex: {e}"))
});

/// Text of the first paragraph mentioning the hiring range.
pub fn salary_paragraph(doc: &Html) -> Option<String> {
    doc.select(&PARAGRAPH)
        .map(html::text)
        .find(|t| t.contains(HIRING_RANGE_PHRASE))
}

/// Every amount in `text`, in order of appearance. `None` if any matched
/// amount does not fit a `u32`; dropping it would shift the others.
pub fn amounts(text: &str) -> Option<Vec<u32>> {
    AMOUNT
        .captures_iter(text)
        .map(|c| strip_amount(&c[1]).parse().ok())
        .collect()
}

pub fn parse_range(text: &str) -> Option<(u32, u32)> {
    let Some(found) = amounts(text) else {
        tracing::warn!("Salary: amount out of range in {text:?}");
        return None;
    };
    match found.as_slice() {
        [low, high, rest @ ..] => {
            if !rest.is_empty() {
                tracing::debug!("Salary: {} extra amount(s) ignored in {text:?}", rest.len());
            }
            Some((*low, *high))
        }
        found => {
            tracing::warn!("Salary: expected two amounts, found {} in {text:?}", found.len());
            None
        }
    }
}

/// Salary bounds of a posting page; `None` when nothing is disclosed.
pub fn extract_range(doc: &Html) -> Option<(u32, u32)> {
    parse_range(&salary_paragraph(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_amounts() {
        assert_eq!(
            parse_range("The hiring range for this position is $120,000 to $150,000 CAD."),
            Some((120_000, 150_000))
        );
    }

    #[test]
    fn first_two_of_many() {
        assert_eq!(
            parse_range("hiring range $85,000 - $110,000, plus up to $10,000 bonus"),
            Some((85_000, 110_000))
        );
    }

    #[test]
    fn a_single_amount_is_no_range() {
        assert_eq!(parse_range("hiring range starts at $90,000"), None);
    }

    #[test]
    fn bare_numbers_are_not_amounts() {
        assert_eq!(amounts("hiring range 120,000 to 150,000"), Some(Vec::new()));
    }

    #[test]
    fn million_scale_groups() {
        assert_eq!(amounts("$1,250,000 and $2,000,000"), Some(vec![1_250_000, 2_000_000]));
    }

    #[test]
    fn oversized_amount_voids_the_range() {
        let text = "hiring range $100,000 to $5,000,000,000 plus $10,000 bonus";
        assert_eq!(amounts(text), None);
        assert_eq!(parse_range(text), None);
    }

    #[test]
    fn inverted_source_text_stays_inverted() {
        assert_eq!(parse_range("hiring range $150,000 to $120,000"), Some((150_000, 120_000)));
    }

    #[test]
    fn paragraph_lookup_uses_full_text() {
        let doc = Html::parse_document(
            "<article><p>Benefits galore.</p>\
             <p>The <strong>hiring range</strong> is $100,000 to $130,000.</p></article>",
        );
        assert_eq!(extract_range(&doc), Some((100_000, 130_000)));
    }

    #[test]
    fn no_disclosure() {
        let doc = Html::parse_document("<p>Competitive salary.</p>");
        assert_eq!(salary_paragraph(&doc), None);
        assert_eq!(extract_range(&doc), None);
    }
}
