// src/store.rs
// Raw page cache: `<dir>/<number>.html`, bytes exactly as served.
// A present file always wins over the network; nothing is ever invalidated.
use std::{fs, path::{Path, PathBuf}};

use crate::config::consts::CACHE_EXT;
use crate::core::net::Fetch;
use crate::error::Result;
use crate::file::ensure_directory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSource {
    Cache,
    Network,
}

pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, number: u32) -> PathBuf {
        self.dir.join(format!("{number}.{CACHE_EXT}"))
    }

    /// Read the cached page for `number`, or fetch `url` and cache it first.
    pub fn load_or_fetch(
        &self,
        number: u32,
        url: &str,
        fetcher: &dyn Fetch,
    ) -> Result<(Vec<u8>, PageSource)> {
        let path = self.path_for(number);
        if path.is_file() {
            return Ok((fs::read(&path)?, PageSource::Cache));
        }

        let raw = fetcher.get(url)?;
        ensure_directory(&self.dir)?;
        fs::write(&path, &raw)?;
        logd!("Cached #{number} -> {}", path.display());
        Ok((raw, PageSource::Network))
    }
}
