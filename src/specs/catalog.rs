// src/specs/catalog.rs
// Catalog search page → (abstract number, detail id) entries.
//
// Each entry looks like
//   <td class="abstractnumber">1234</td> … <a href="javascript:viewAbs(5150)">Title</a>
// The number cell gives the public abstract number; the first parenthesized digit
// run in the next link's href is the id the detail page is keyed on.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{CATALOG_NUMBER_CLASS, LINK_TAG};
use crate::core::html::{decode_page, elements_named, find_next, has_class, text_of};
use crate::error::{Result, ScrapeError};

static DETAIL_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").expect("id regex"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub number: u32,
    pub detail_id: String,
}

/// Entries in page order. Rows whose link carries no `(digits)` are skipped;
/// a number cell that is not an integer aborts the parse.
pub fn parse_catalog(raw: &[u8]) -> Result<Vec<CatalogEntry>> {
    let page = Html::parse_document(&decode_page(raw));
    let mut entries = Vec::new();

    for cell in elements_named(&page, "td").filter(|td| has_class(*td, CATALOG_NUMBER_CLASS)) {
        let Some(link) = find_next(cell, LINK_TAG) else { continue };
        let href = link.value().attr("href").unwrap_or("");
        let Some(caps) = DETAIL_ID.captures(href) else {
            logd!("Catalog: no detail id in href {href:?}");
            continue;
        };

        let cell_text = text_of(cell);
        let number: u32 = cell_text.trim().parse().map_err(|_| {
            ScrapeError::Catalog(format!("abstract number cell is not an integer: {cell_text:?}"))
        })?;

        entries.push(CatalogEntry { number, detail_id: s!(&caps[1]) });
    }

    Ok(entries)
}
