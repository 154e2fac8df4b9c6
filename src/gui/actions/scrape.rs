// src/gui/actions/scrape.rs
use crate::{
    core::HttpFetcher,
    gui::{app::App, progress::GuiProgress},
    scrape::collect_postings,
    store::Origin,
};

/// Cache gate from the GUI: an existing artifact is loaded, otherwise the
/// careers site is scraped and the artifact written. Runs on the UI thread.
pub fn scrape(app: &mut App) {
    let cache = app.cache();
    let scrape_opts = app.state.options.scrape.clone();
    let mut prog = GuiProgress::new(app.status.clone());

    tracing::info!("Scrape: Begin url={} cache={}", scrape_opts.listing_url, cache.path().display());

    // → This is where the scrape happens ←
    let res = cache.load_or_fetch(|| {
        let fetcher = HttpFetcher::new()?;
        collect_postings(&fetcher, &scrape_opts, Some(&mut prog))
    });

    match res {
        Ok(loaded) => {
            let n = loaded.postings.len();
            app.status(match loaded.origin {
                Origin::Cache => format!("Loaded {n} posting(s) from {}", cache.path().display()),
                Origin::Fresh => format!("Scraped {n} posting(s) → {}", cache.path().display()),
            });
            app.postings = loaded.postings;
            app.origin = Some(loaded.origin);
            app.cache_on_disk = true;
        }
        Err(e) => {
            tracing::error!("Scrape: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
