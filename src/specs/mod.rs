// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific extraction for the abstract site. Each spec knows *where the data
//! lives in the HTML* for one page type and turns a raw page into plain values.
//!
//! ## What lives here
//! - **Pure HTML parsing**: `catalog` (search listing) and `abstract_page` (detail page).
//! - **Section scanning** (`section`): the h4-to-h4 block walk shared by body sections
//!   and keyword lists, with figure/caption skipping.
//!
//! ## What does **not** live here
//! - **Fetching and caching** (`core::net`, `store`).
//! - **Corpus-wide filtering** (`corpus`) – specs extract one page at a time and never
//!   see other pages.
//! - **Export** (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner → store::load_or_fetch → specs::abstract_page::extract_fields
//!        ↘ corpus::WordCounts::accumulate        (per page)
//!        ↘ corpus removal set → Abstract::finalize_words   (after all pages)
//! ```
//!
//! ## Conventions & invariants
//! - Markers are `h4` matched on trimmed text; content blocks are `div`.
//! - "Next" means next in document order, not next sibling.
//! - Malformed markup degrades to partial/empty fields; only the catalog can error.
//!
//! ## Testing notes
//! - Every spec is testable offline against inline HTML snippets.
pub mod abstract_page;
pub mod catalog;
pub mod section;
