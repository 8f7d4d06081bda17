// tests/common/mod.rs
#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use abstract_scrape::config::options::RunOptions;
use abstract_scrape::core::net::Fetch;
use abstract_scrape::error::{Result, ScrapeError};

pub const CATALOG: &str = "http://test/catalog";
pub const DETAIL: &str = "http://test/abs/{}";

/// Serves pages from memory and records every URL asked for.
#[derive(Default)]
pub struct StubFetcher {
    pub pages: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn add(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.pages.insert(url.into(), body.into());
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { url: url.to_string(), status: 404 })
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("abstract_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn options(dir: &PathBuf) -> RunOptions {
    RunOptions {
        cache_dir: dir.join("pages"),
        out_path: dir.join("abstract.json"),
        catalog_url: CATALOG.to_string(),
        detail_url_tmpl: DETAIL.to_string(),
        ..RunOptions::default()
    }
}

/// Catalog with entries numbered `first..first+n`, detail ids `500+i`.
pub fn catalog(numbers: &[u32]) -> String {
    let mut rows = String::new();
    for (i, n) in numbers.iter().enumerate() {
        rows.push_str(&format!(
            r#"<tr><td class="abstractnumber">{n}</td><td><a href="javascript:viewAbs({})">Title {n}</a></td></tr>"#,
            500 + i
        ));
    }
    format!("<html><body><table>{rows}</table></body></html>")
}

pub fn detail_url(i: usize) -> String {
    DETAIL.replace("{}", &(500 + i).to_string())
}

pub fn page(authors: &str, intro: &str, keywords: &[&str]) -> String {
    let kw: String = keywords.iter().map(|k| format!("<div>{k}</div>")).collect();
    format!(
        r#"<html><body>
            <h4>Authors:</h4><div>{authors}</div>
            <h4>Introduction:</h4><div>{intro}</div>
            <h4>Keywords:</h4>{kw}
            <h4>References:</h4><div>Not part of anything 2020.</div>
        </body></html>"#
    )
}
