// src/specs/posting.rs
//! Extraction rules for a single posting page.
//!
//! Layout the site uses:
//! ```html
//! <h1>Senior Scientist, Protein Engineering</h1>
//! <article>
//!   <div class="meta">
//!     <span class="date">January 5, 2023</span>
//!     <span class="id">Job ID: R1234</span>
//!   </div>
//!   ...
//!   <p>The hiring range for this position is $120,000 to $150,000.</p>
//! </article>
//! ```
//!
//! Every lookup is strict except salary (see `specs::salary`): a missing
//! heading, date or id fails the whole run.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{ID_SEPARATOR, PLACEHOLDER_HEADING, POSTING_DATE_FORMAT};
use crate::core::html;
use crate::data::JobPosting;
use crate::error::MarkupError;

use super::salary;

static HEADING: LazyLock<Selector> = LazyLock::new(|| html::selector("h1"));
static ARTICLE: LazyLock<Selector> = LazyLock::new(|| html::selector("article"));
static DATE: LazyLock<Selector> = LazyLock::new(|| html::selector("span.date"));
static ID: LazyLock<Selector> = LazyLock::new(|| html::selector("span.id"));

pub fn role(doc: &Html) -> Result<String, MarkupError> {
    html::first(doc, &HEADING)
        .map(html::text)
        .ok_or(MarkupError::MissingHeading)
}

/// The "DO YOU DREAM BIG" page is a general-application template, not an opening.
pub fn is_placeholder(role: &str) -> bool {
    role.to_uppercase().contains(PLACEHOLDER_HEADING)
}

fn article(doc: &Html) -> Result<ElementRef<'_>, MarkupError> {
    html::first(doc, &ARTICLE).ok_or(MarkupError::MissingArticle)
}

pub fn date(article: ElementRef<'_>) -> Result<NaiveDate, MarkupError> {
    let text = html::first_in(article, &DATE)
        .map(html::text)
        .ok_or(MarkupError::MissingDate)?;
    NaiveDate::parse_from_str(&text, POSTING_DATE_FORMAT)
        .map_err(|source| MarkupError::BadDate { text, source })
}

/// "Job ID: R1234" → "R1234"
pub fn id(article: ElementRef<'_>) -> Result<String, MarkupError> {
    let text = html::first_in(article, &ID)
        .map(html::text)
        .ok_or(MarkupError::MissingId)?;
    let value = text.split_once(ID_SEPARATOR).map(|(_, v)| s!(v.trim()));
    value.ok_or(MarkupError::BadId { text })
}

/// Full posting. Placeholder pages are the caller's concern (`is_placeholder`).
pub fn parse(doc: &Html) -> Result<JobPosting, MarkupError> {
    let role = role(doc)?;
    let article = article(doc)?;
    let posting = JobPosting::new(role, date(article)?, id(article)?)
        .with_salary(salary::extract_range(doc));
    Ok(posting)
}
