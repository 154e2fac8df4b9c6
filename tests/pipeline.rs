// tests/pipeline.rs
mod common;

use chrono::NaiveDate;

use common::{FixtureFetcher, LISTING, fixture};
use salary_scrape::config::options::ScrapeOptions;
use salary_scrape::progress::Progress;
use salary_scrape::scrape::collect_postings;
use salary_scrape::{Error, MarkupError};

fn opts() -> ScrapeOptions {
    ScrapeOptions { listing_url: LISTING.to_string() }
}

#[test]
fn template_page_is_excluded() {
    let fetcher = FixtureFetcher::careers_site();
    let postings = collect_postings(&fetcher, &opts(), None).unwrap();

    assert_eq!(postings.len(), 2);
    assert!(postings.iter().all(|p| !p.role.to_uppercase().contains("DO YOU DREAM BIG")));
    // listing + three posting pages, in order
    assert_eq!(fetcher.calls.get(), 4);
    assert_eq!(fetcher.seen.borrow()[0], LISTING);
}

#[test]
fn hiring_range_sentence_gives_both_bounds() {
    let postings = collect_postings(&FixtureFetcher::careers_site(), &opts(), None).unwrap();
    let scientist = &postings[0];

    assert_eq!(scientist.role, "Senior Scientist, Protein Engineering");
    assert_eq!(scientist.date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
    assert_eq!(scientist.id, "R101");
    assert_eq!(scientist.salary_range(), Some((120_000, 150_000)));
}

#[test]
fn posting_without_salary_is_kept_without_bounds() {
    let postings = collect_postings(&FixtureFetcher::careers_site(), &opts(), None).unwrap();
    let tech = &postings[1];

    assert_eq!(tech.role, "Laboratory Technician");
    assert_eq!(tech.id, "R102");
    assert_eq!(tech.salary_low_end, None);
    assert_eq!(tech.salary_high_end, None);
}

#[test]
fn disclosed_bounds_are_ordered() {
    let postings = collect_postings(&FixtureFetcher::careers_site(), &opts(), None).unwrap();
    for (low, high) in postings.iter().filter_map(|p| p.salary_range()) {
        assert!(low <= high);
    }
}

#[test]
fn unchanged_site_serializes_identically() {
    let a = collect_postings(&FixtureFetcher::careers_site(), &opts(), None).unwrap();
    let b = collect_postings(&FixtureFetcher::careers_site(), &opts(), None).unwrap();
    assert_eq!(
        serde_json::to_string_pretty(&a).unwrap(),
        serde_json::to_string_pretty(&b).unwrap()
    );
}

#[test]
fn malformed_posting_fails_the_run() {
    let fetcher = FixtureFetcher::new()
        .page(LISTING, r#"<a href="?gh_jid=104">View position</a>"#.to_string())
        .page(&format!("{LISTING}?gh_jid=104"), fixture("posting_missing_date.html"));

    let err = collect_postings(&fetcher, &opts(), None).unwrap_err();
    match err {
        Error::Markup { url, source: MarkupError::MissingDate } => {
            assert_eq!(url, format!("{LISTING}?gh_jid=104"));
        }
        other => panic!("expected missing date, got {other:?}"),
    }
}

#[test]
fn fetch_failure_stops_before_later_pages() {
    // second posting is not served
    let fetcher = FixtureFetcher::new()
        .page(LISTING, fixture("listing.html"))
        .page(&format!("{LISTING}?gh_jid=101"), fixture("posting_with_salary.html"));

    assert!(collect_postings(&fetcher, &opts(), None).is_err());
    assert_eq!(fetcher.calls.get(), 3);
}

#[test]
fn empty_listing_is_an_empty_collection() {
    let fetcher = FixtureFetcher::new().page(LISTING, "<p>No openings</p>".to_string());
    assert!(collect_postings(&fetcher, &opts(), None).unwrap().is_empty());
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    skipped: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, role: &str) { self.done.push(role.to_string()); }
    fn item_skipped(&mut self, role: &str) { self.skipped.push(role.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_link() {
    let mut rec = Recorder::default();
    collect_postings(&FixtureFetcher::careers_site(), &opts(), Some(&mut rec)).unwrap();

    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, ["Senior Scientist, Protein Engineering", "Laboratory Technician"]);
    assert_eq!(rec.skipped, ["DO YOU DREAM BIG?"]);
    assert!(rec.finished);
}
