// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use salary_scrape::core::Fetch;
use salary_scrape::{Error, Result};

pub const LISTING: &str = "https://careers.example.com/openings/";

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

/// Canned pages keyed by URL; counts every request.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    pub calls: Cell<usize>,
    pub seen: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    /// Listing with three postings: salary, no salary, template page.
    pub fn careers_site() -> Self {
        Self::new()
            .page(LISTING, fixture("listing.html"))
            .page(&format!("{LISTING}?gh_jid=101"), fixture("posting_with_salary.html"))
            .page(&format!("{LISTING}?gh_jid=102"), fixture("posting_without_salary.html"))
            .page(&format!("{LISTING}?gh_jid=103"), fixture("posting_placeholder.html"))
    }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(url.to_string());
        self.pages.get(url).cloned().ok_or_else(|| {
            Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, format!("no fixture for {url}")))
        })
    }
}
