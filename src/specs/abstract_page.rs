// src/specs/abstract_page.rs
// Field extractor for one abstract detail page.
//
// Page layout (as served):
//   <h4>Authors:</h4>      <div>Smith J1, Jones K2</div>
//   <h4>Introduction:</h4> <div>…</div> <div>…</div>
//   <h4>Methods:</h4>      <div>…</div> <div><a href=fig.png>…</a></div> <div class=abstractcaption>…</div>
//   …
//   <h4>Keywords:</h4>     <div>MRI</div> <div>fMRI</div>
//
// Markers are `h4` whose trimmed text is the label; content is the run of `div`s after it.

use std::collections::HashSet;

use scraper::Html;

use super::section::scan_section;
use crate::config::consts::{
    AUTHORS_LABEL, BLOCK_TAG, BODY_SECTIONS, DEMO_PHRASE, KEYWORDS_LABEL, MARKER_TAG,
};
use crate::core::html::{decode_page, elements_named, find_next, text_of};
use crate::core::sanitize::{contains_ci, normalize_words, split_authors, split_keywords};
use crate::data::Abstract;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extracted {
    pub software_demo: bool,
    pub authors: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    /// Union of the normalized words of all four body sections.
    pub words: HashSet<String>,
}

impl Extracted {
    pub fn apply_to(self, record: &mut Abstract) {
        record.software_demo = Some(self.software_demo);
        if self.authors.is_some() {
            record.authors = self.authors;
        }
        if self.keywords.is_some() {
            record.keywords = self.keywords;
        }
        record.words = Some(self.words);
    }
}

/// Pull authors, keywords and the body word set out of a raw page.
/// Malformed pages give partial results, never an error.
pub fn extract_fields(raw: &[u8]) -> Extracted {
    let mut out = Extracted {
        software_demo: contains_ci(raw, DEMO_PHRASE),
        ..Default::default()
    };

    let page = Html::parse_document(&decode_page(raw));

    for marker in elements_named(&page, MARKER_TAG) {
        let label = text_of(marker);
        let label = label.trim();

        if BODY_SECTIONS.contains(&label) {
            let text = scan_section(
                find_next(marker, BLOCK_TAG),
                find_next(marker, MARKER_TAG),
                "",
            );
            out.words.extend(normalize_words(&text));
        } else if label == AUTHORS_LABEL {
            if let Some(block) = find_next(marker, BLOCK_TAG) {
                out.authors = Some(split_authors(&text_of(block)));
            }
        } else if label == KEYWORDS_LABEL {
            let joined = scan_section(
                find_next(marker, BLOCK_TAG),
                find_next(marker, MARKER_TAG),
                ",",
            );
            out.keywords = Some(split_keywords(&joined));
        }
    }

    out
}
