// benches/posting.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use salary_scrape::specs::{listing, posting, salary};

fn load_fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn bench_posting(c: &mut Criterion) {
    let page = load_fixture("posting_with_salary.html");
    let listing_page = load_fixture("listing.html");

    c.bench_function("posting_parse_document", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(&page));
            black_box(posting::parse(&doc).map(|p| p.salary_range()).ok())
        })
    });

    let doc = Html::parse_document(&page);
    c.bench_function("posting_parse_only", |b| {
        b.iter(|| black_box(posting::parse(black_box(&doc)).ok()))
    });

    c.bench_function("salary_parse_range", |b| {
        b.iter(|| {
            salary::parse_range(black_box(
                "The hiring range for this position is $120,000 to $150,000 CAD per year.",
            ))
        })
    });

    let listing_doc = Html::parse_document(&listing_page);
    c.bench_function("listing_links", |b| {
        b.iter(|| black_box(listing::posting_links(black_box(&listing_doc), "https://example.com/careers-openings/")))
    });
}

criterion_group!(benches, bench_posting);
criterion_main!(benches);
