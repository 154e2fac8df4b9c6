// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for the careers site. Each module encodes *where the
//! ground truth lives in the HTML* and turns it into typed values.
//!
//! ## What lives here
//! - **Pure HTML reading** of already-fetched documents (`scraper::Html`).
//! - **Named lookups** (`role`, `date`, `id`, `salary_paragraph`, …) that each
//!   check the shape they expect and return a `MarkupError` when it is absent.
//! - The site's conventions: the "View position" link marker, the
//!   "DO YOU DREAM BIG" template page, the "hiring range" disclosure.
//!
//! ## What does **not** live here
//! - **Networking**: `core::net`.
//! - **Caching/persistence**: `store`.
//! - **Ordering of the run** (fetch listing, fetch each posting, skip
//!   templates): `scrape`.
//!
//! ## Typical call chain
//! ```text
//! cli / gui → store::PostingCache::load_or_fetch → scrape::collect_postings
//!                 → specs::listing::posting_links
//!                 → specs::posting::parse → specs::salary::extract_range
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against captured fixtures under `tests/fixtures/`.
pub mod listing;
pub mod posting;
pub mod salary;
