// src/scrape.rs
//! Listing → posting pages → `JobPosting`s.
//!
//! Strictly sequential: one page fetched and parsed at a time. The first error
//! ends the run; nothing is skipped except template pages.

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    data::JobPosting,
    error::Result,
    progress::Progress,
    specs::{listing, posting},
};

/// Fetch and parse every posting linked from the listing page.
pub fn collect_postings(
    fetcher: &dyn Fetch,
    scrape: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<JobPosting>> {
    let listing_url = scrape.listing_url.as_str();

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading listing…");
    }
    let listing_doc = fetcher.document(listing_url)?;
    let links = listing::posting_links(&listing_doc, listing_url);
    tracing::info!("Scrape: {} posting link(s) on {listing_url}", links.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut postings = Vec::with_capacity(links.len());
    for link in &links {
        let doc = fetcher.document(link)?;

        let role = posting::role(&doc).map_err(|e| e.at(link))?;
        if posting::is_placeholder(&role) {
            tracing::warn!("Scrape: skipping template page {link} ({role:?})");
            if let Some(p) = progress.as_deref_mut() {
                p.item_skipped(&role);
            }
            continue;
        }

        let job = posting::parse(&doc).map_err(|e| e.at(link))?;
        tracing::debug!(
            "Scrape: {} [{}] {} salary={:?}",
            job.id, job.date, job.role, job.salary_range()
        );
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&job.role);
        }
        postings.push(job);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    tracing::info!("Scrape: {} posting(s) parsed", postings.len());
    Ok(postings)
}
