// src/core/net.rs
//
// Blocking HTTP GET. One request at a time, no retry.

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

/// Source of page bodies. The pipeline only ever talks to this trait, so
/// tests can hand it canned HTML.
pub trait Fetch {
    /// Body of `url` as text. Non-2xx is an error.
    fn get(&self, url: &str) -> Result<String>;

    fn document(&self, url: &str) -> Result<Html> {
        let body = self.get(url)?;
        Ok(Html::parse_document(&body))
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| Error::Fetch { url: s!(), source })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        let fail = |source: reqwest::Error| Error::Fetch { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(fail)?;
        let status = resp.status();
        tracing::debug!("GET {url} → {status}");

        let body = resp.error_for_status().map_err(fail)?.text().map_err(fail)?;
        tracing::debug!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}
