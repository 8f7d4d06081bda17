// src/core/net.rs
// Blocking HTTP GET. One attempt per URL; any failure is returned to the caller.

use std::time::Duration;

use crate::config::consts::{TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into raw page bytes.
/// The pipeline only talks to this, so tests can serve pages from memory.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            loge!("GET {url} -> {status}");
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp.bytes()?.to_vec())
    }
}
