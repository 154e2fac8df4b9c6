// tests/cache_gate.rs
mod common;

use std::fs;

use common::{FixtureFetcher, LISTING};
use salary_scrape::config::options::ScrapeOptions;
use salary_scrape::scrape::collect_postings;
use salary_scrape::store::{Origin, PostingCache};
use salary_scrape::Error;

fn scrape_opts() -> ScrapeOptions {
    ScrapeOptions { listing_url: LISTING.to_string() }
}

#[test]
fn missing_artifact_scrapes_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let cache = PostingCache::new(dir.path().join("job_postings.json"));
    let fetcher = FixtureFetcher::careers_site();

    let loaded = cache.load_or_fetch(|| collect_postings(&fetcher, &scrape_opts(), None)).unwrap();

    assert_eq!(loaded.origin, Origin::Fresh);
    assert_eq!(loaded.postings.len(), 2);
    assert!(cache.exists());
    assert_eq!(cache.load().unwrap(), loaded.postings);
}

#[test]
fn present_artifact_means_zero_fetches() {
    let dir = tempfile::tempdir().unwrap();
    let cache = PostingCache::new(dir.path().join("job_postings.json"));

    let first = FixtureFetcher::careers_site();
    let scraped = cache.load_or_fetch(|| collect_postings(&first, &scrape_opts(), None)).unwrap();

    let second = FixtureFetcher::careers_site();
    let loaded = cache.load_or_fetch(|| collect_postings(&second, &scrape_opts(), None)).unwrap();

    assert_eq!(loaded.origin, Origin::Cache);
    assert_eq!(second.calls.get(), 0);
    assert_eq!(loaded.postings, scraped.postings);
}

#[test]
fn artifact_bytes_are_stable_across_fresh_runs() {
    let dir = tempfile::tempdir().unwrap();
    let a = PostingCache::new(dir.path().join("a.json"));
    let b = PostingCache::new(dir.path().join("b.json"));

    a.load_or_fetch(|| collect_postings(&FixtureFetcher::careers_site(), &scrape_opts(), None)).unwrap();
    b.load_or_fetch(|| collect_postings(&FixtureFetcher::careers_site(), &scrape_opts(), None)).unwrap();

    assert_eq!(fs::read(a.path()).unwrap(), fs::read(b.path()).unwrap());
}

#[test]
fn corrupt_artifact_is_an_error_not_a_refetch() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job_postings.json");
    fs::write(&path, "{ not json").unwrap();

    let fetcher = FixtureFetcher::careers_site();
    let res = PostingCache::new(&path).load_or_fetch(|| collect_postings(&fetcher, &scrape_opts(), None));

    assert!(matches!(res, Err(Error::CacheDecode { .. })));
    assert_eq!(fetcher.calls.get(), 0);
    // left untouched
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn failed_scrape_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cache = PostingCache::new(dir.path().join("job_postings.json"));
    let empty = FixtureFetcher::new();

    assert!(cache.load_or_fetch(|| collect_postings(&empty, &scrape_opts(), None)).is_err());
    assert!(!cache.exists());
}

#[test]
fn hand_written_artifact_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job_postings.json");
    fs::write(
        &path,
        r#"[
  {"role": "Scientist", "date": "2023-02-01", "id": "R1", "salary_low_end": 90000, "salary_high_end": 110000},
  {"role": "Technician", "date": "2022-12-31", "id": "R2", "salary_low_end": null, "salary_high_end": null}
]"#,
    )
    .unwrap();

    let loaded = PostingCache::new(&path)
        .load_or_fetch(|| panic!("cache present, nothing should be fetched"))
        .unwrap();
    assert_eq!(loaded.origin, Origin::Cache);
    assert_eq!(loaded.postings[0].salary_range(), Some((90_000, 110_000)));
    assert!(!loaded.postings[1].has_salary());
}
