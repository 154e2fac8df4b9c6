// src/store.rs
//! Cache artifact for the posting collection.
//!
//! One pretty-printed JSON array at a fixed path. If the file exists it is the
//! answer; nothing expires it and nothing refreshes part of it. Delete the
//! file to scrape again.

use std::{fs, path::{Path, PathBuf}};

use crate::{
    data::JobPosting,
    error::{Error, Result},
    file::ensure_directory,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Read from the artifact; no network work happened.
    Cache,
    /// Scraped just now and written to the artifact.
    Fresh,
}

#[derive(Debug)]
pub struct Loaded {
    pub postings: Vec<JobPosting>,
    pub origin: Origin,
}

#[derive(Clone, Debug)]
pub struct PostingCache {
    path: PathBuf,
}

impl PostingCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Vec<JobPosting>> {
        let text = fs::read_to_string(&self.path)
            .map_err(|source| Error::CacheRead { path: self.path.clone(), source })?;
        serde_json::from_str(&text)
            .map_err(|source| Error::CacheDecode { path: self.path.clone(), source })
    }

    pub fn save(&self, postings: &[JobPosting]) -> Result<()> {
        let mut text = serde_json::to_string_pretty(postings)
            .map_err(|source| Error::CacheEncode { path: self.path.clone(), source })?;
        text.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)
                    .map_err(|source| Error::CacheWrite { path: self.path.clone(), source })?;
            }
        }
        fs::write(&self.path, text)
            .map_err(|source| Error::CacheWrite { path: self.path.clone(), source })
    }

    /// The decision point: artifact present → load it and never call `fetch`;
    /// absent → call `fetch`, persist what it returns, hand it back.
    pub fn load_or_fetch<F>(&self, fetch: F) -> Result<Loaded>
    where
        F: FnOnce() -> Result<Vec<JobPosting>>,
    {
        if self.exists() {
            let postings = self.load()?;
            tracing::info!("Cache: loaded {} posting(s) from {}", postings.len(), self.path.display());
            return Ok(Loaded { postings, origin: Origin::Cache });
        }

        tracing::info!("Cache: {} missing, scraping", self.path.display());
        let postings = fetch()?;
        self.save(&postings)?;
        tracing::info!("Cache: saved {} posting(s) → {}", postings.len(), self.path.display());
        Ok(Loaded { postings, origin: Origin::Fresh })
    }
}
