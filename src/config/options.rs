// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    /// Raw page cache, one `<number>.html` per abstract.
    pub cache_dir: PathBuf,
    pub out_path: PathBuf,
    pub catalog_url: String,
    pub detail_url_tmpl: String,
    /// Relative document frequency above which a word is dropped from every abstract.
    pub threshold: f64,
    /// Only process the first N catalog entries.
    pub limit: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(CACHE_DIR),
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            catalog_url: s!(CATALOG_URL),
            detail_url_tmpl: s!(DETAIL_URL_TMPL),
            threshold: DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

impl RunOptions {
    pub fn detail_url(&self, id: &str) -> String {
        self.detail_url_tmpl.replacen("{}", id, 1)
    }

    pub fn log_path(&self) -> PathBuf {
        self.cache_dir.join(LOG_FILENAME)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ScrapeError::Options(format!(
                "threshold must be within 0.0..=1.0, got {}",
                self.threshold
            )));
        }
        if !self.detail_url_tmpl.contains("{}") {
            return Err(ScrapeError::Options(format!(
                "detail URL template has no '{{}}' placeholder: {}",
                self.detail_url_tmpl
            )));
        }
        Ok(())
    }
}
