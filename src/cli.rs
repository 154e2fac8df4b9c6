// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::DEFAULT_BENCHMARK;
use crate::config::options::{AppOptions, ChartStyle, ExportFormat, ExportOptions};
use crate::core::HttpFetcher;
use crate::error::{Error, Result};
use crate::file::export_table;
use crate::progress::Progress;
use crate::report::{self, ReportPaths};
use crate::scrape;
use crate::store::{Origin, PostingCache};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Scrape careers-page salary ranges and chart them")]
pub struct Args {
    /// Listing page with links to every posting
    #[arg(long)]
    pub url: Option<String>,

    /// Cache artifact; if it exists nothing is fetched
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Directory for the HTML and PNG report
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// grouped | box
    #[arg(long)]
    pub style: Option<ChartStyle>,

    /// Benchmark salary; skips the prompt
    #[arg(long, allow_negative_numbers = true)]
    pub benchmark: Option<i64>,

    /// Also write the salary table here
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Table format: csv | tsv
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Table without header row
    #[arg(long)]
    pub no_headers: bool,
}

impl Args {
    /// Defaults overlaid with whatever was passed.
    pub fn options(&self) -> AppOptions {
        let mut o = AppOptions::default();
        if let Some(url) = &self.url { o.scrape.listing_url = url.clone(); }
        if let Some(path) = &self.cache { o.cache.path = path.clone(); }
        if let Some(dir) = &self.out_dir { o.report.out_dir = dir.clone(); }
        if let Some(style) = self.style { o.report.style = style; }
        if let Some(b) = self.benchmark { o.report.benchmark = b; }
        o.export = self.table.as_ref().map(|path| {
            let mut e = ExportOptions::new(path.clone(), self.format);
            e.include_headers = !self.no_headers;
            e
        });
        o
    }
}

/// Empty (after trimming) → default; anything else must be an integer.
pub fn parse_benchmark(input: &str) -> Result<i64> {
    let t = input.trim();
    if t.is_empty() {
        return Ok(DEFAULT_BENCHMARK);
    }
    t.parse::<i64>().map_err(|source| Error::Benchmark { input: s!(t), source })
}

pub fn prompt_benchmark<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<i64> {
    write!(out, "Enter a salary to compare (default {DEFAULT_BENCHMARK}): ")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_benchmark(&line)
}

/// Progress lines on stderr.
struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Found {total} posting link(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, role: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {role}", self.seen, self.total);
    }
    fn item_skipped(&mut self, role: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] skipped {role}", self.seen, self.total);
    }
    fn finish(&mut self) {
        eprintln!("Done.");
    }
}

pub fn run() -> Result<()> {
    crate::log::init();
    let args = Args::parse();
    let mut opts = args.options();
    tracing::info!("CLI: start {:?}", args);

    let cache = PostingCache::new(&opts.cache.path);
    let loaded = cache.load_or_fetch(|| {
        let fetcher = HttpFetcher::new()?;
        let mut progress = CliProgress { total: 0, seen: 0 };
        scrape::collect_postings(&fetcher, &opts.scrape, Some(&mut progress))
    })?;
    match loaded.origin {
        Origin::Cache => eprintln!("Loaded {} posting(s) from {}", loaded.postings.len(), cache.path().display()),
        Origin::Fresh => eprintln!("Saved {} posting(s) to {}", loaded.postings.len(), cache.path().display()),
    }

    if args.benchmark.is_none() {
        let stdin = io::stdin();
        opts.report.benchmark = prompt_benchmark(stdin.lock(), io::stdout())?;
    }

    if let Some(export) = &opts.export {
        let rows = report::chart_rows(&loaded.postings, &opts.report);
        let path = export_table(export, &rows)?;
        eprintln!("Table → {}", path.display());
    }

    let ReportPaths { html, png } = report::write_report(&loaded.postings, &opts.report)?;
    println!("{}", html.display());
    println!("{}", png.display());
    Ok(())
}
