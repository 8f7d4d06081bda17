// src/data.rs
//
// One record per catalog entry.
//
// - Created from the catalog with only `number` + `url` set; nothing else is exported.
// - Extraction fills `software_demo`, `authors`, `keywords` and the raw word set.
// - The filtering pass turns the raw word set into the sorted `abstract` list.
//
// Only `finalize_words` produces the exported word list; the raw set never leaves
// the process.

use std::collections::HashSet;

use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Abstract {
    pub number: u32,
    pub url: String,
    /// `None` until the page was extracted.
    #[serde(rename = "software-demo", skip_serializing_if = "Option::is_none")]
    pub software_demo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Body words before corpus filtering. `Some` once the page was extracted.
    #[serde(skip)]
    pub words: Option<HashSet<String>>,
    /// Sorted, filtered body words.
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
}

impl Abstract {
    pub fn new(number: u32, url: impl Into<String>) -> Self {
        Self { number, url: url.into(), ..Default::default() }
    }

    /// Extraction already ran for this entry; resume skips it.
    #[inline]
    pub fn is_extracted(&self) -> bool {
        self.words.is_some()
    }

    /// Drop every word in `removal` and store the rest sorted.
    /// No-op for entries that were never extracted.
    pub fn finalize_words(&mut self, removal: &HashSet<String>) {
        if let Some(words) = &self.words {
            let mut kept: Vec<String> = words.difference(removal).cloned().collect();
            kept.sort_unstable();
            self.body = Some(kept);
        }
    }
}
