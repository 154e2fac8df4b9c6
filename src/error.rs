// src/error.rs
//! Error types for the scraper.
//!
//! Every failure is fatal for the run: nothing here is retried. The CLI reports
//! through `color-eyre`, the GUI shows the message in its status line.

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or non-2xx response
    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page does not have the shape the extractors expect
    #[error("Unexpected markup at {url}: {source}")]
    Markup {
        url: String,
        #[source]
        source: MarkupError,
    },

    #[error("Cannot read cache artifact {}: {source}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Corrupt or incompatible artifact. Never falls back to a re-fetch.
    #[error("Cache artifact {} is corrupt: {source}", path.display())]
    CacheDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot encode postings for {}: {source}", path.display())]
    CacheEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write cache artifact {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Benchmark salary must be an integer, got {input:?}")]
    Benchmark {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What was missing or malformed on a posting page.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("no <h1> heading")]
    MissingHeading,

    #[error("no posting <article>")]
    MissingArticle,

    #[error("no <span class=\"date\">")]
    MissingDate,

    #[error("date {text:?} is not \"Month Day, Year\": {source}")]
    BadDate {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("no <span class=\"id\">")]
    MissingId,

    #[error("id {text:?} has no \"label: value\" separator")]
    BadId { text: String },
}

impl MarkupError {
    pub fn at(self, url: impl Into<String>) -> Error {
        Error::Markup { url: url.into(), source: self }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
