// src/specs/listing.rs
//! Listing page → posting URLs.
//!
//! Every `<a>` whose visible text contains the marker ("View position") is a
//! posting link. Relative hrefs are prefixed with the listing URL itself, the
//! way the site builds them; absolute hrefs pass through.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::LINK_MARKER;
use crate::core::html;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| html::selector("a"));

/// Posting URLs in document order. May be empty.
pub fn posting_links(doc: &Html, listing_url: &str) -> Vec<String> {
    doc.select(&ANCHOR)
        .filter(|a| html::text(*a).contains(LINK_MARKER))
        .filter_map(|a| a.value().attr("href"))
        .map(|href| resolve(listing_url, href.trim()))
        .collect()
}

fn resolve(listing_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        s!(href)
    } else {
        join!(listing_url, href)
    }
}
