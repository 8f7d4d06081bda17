// src/config/consts.rs

// Net config
pub const CATALOG_URL: &str =
    "https://ww4.aievolution.com/hbm2001/index.cfm?do=abs.pubSearchAbstracts";
/// `{}` is replaced by the id pulled out of the catalog link.
pub const DETAIL_URL_TMPL: &str =
    "https://ww4.aievolution.com/hbm2001/index.cfm?do=abs.viewAbs&abs={}";
pub const USER_AGENT: &str = "abstract_scrape/0.1";
pub const TIMEOUT_SECS: u64 = 30;

// Local cache
pub const CACHE_DIR: &str = "abstracts-full";
pub const CACHE_EXT: &str = "html";
pub const LOG_FILENAME: &str = "scrape.log";

// Export
pub const DEFAULT_OUT_FILE: &str = "abstract.json";

// Page markup
pub const MARKER_TAG: &str = "h4";
pub const BLOCK_TAG: &str = "div";
pub const LINK_TAG: &str = "a";
pub const BODY_SECTIONS: [&str; 4] = ["Introduction:", "Methods:", "Results:", "Conclusions:"];
pub const AUTHORS_LABEL: &str = "Authors:";
pub const KEYWORDS_LABEL: &str = "Keywords:";
pub const CAPTION_CLASSES: [&str; 3] = ["abstractcaption", "priorityOrderHint", "clear"];
/// Matched ASCII-case-insensitively against the raw page bytes.
pub const DEMO_PHRASE: &str = "presentation: software demonstrations";

// Catalog markup
pub const CATALOG_NUMBER_CLASS: &str = "abstractnumber";

// Corpus
pub const DEFAULT_THRESHOLD: f64 = 0.25;

// Progress
pub const PROGRESS_EVERY: usize = 10;
