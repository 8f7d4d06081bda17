// src/core/sanitize.rs
// Text rules for abstract fields: body words, author lists, keyword lists.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digit regex"));
static COMMA_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",+\s*").expect("comma regex"));

/// Trim ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_{|}~` and backtick) from both ends.
pub fn trim_punct(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Split section text into its set of normalized words.
///
/// Splits on `' '` only, so tabs and newlines stay inside fragments.
/// A fragment survives when it still has something left after deleting digits and
/// trimming punctuation; the kept form is only punctuation-trimmed and lowercased,
/// so `"mri3"` stays `"mri3"` while `"42"` and `"(12)."` disappear.
pub fn normalize_words(text: &str) -> HashSet<String> {
    text.split(' ')
        .filter(|frag| {
            let no_digits = DIGIT_RUNS.replace_all(frag, "");
            !trim_punct(&no_digits).is_empty()
        })
        .map(|frag| trim_punct(frag).to_lowercase())
        .collect()
}

/// `"Smith J1, Jones K2,, Lee M3"` → `["Smith J", "Jones K", "Lee M"]`.
/// Digits are affiliation superscripts; comma runs (with trailing whitespace) collapse to one.
pub fn split_authors(raw: &str) -> Vec<String> {
    let no_digits = DIGIT_RUNS.replace_all(raw.trim(), "");
    let collapsed = COMMA_RUNS.replace_all(&no_digits, ",");
    collapsed
        .split(',')
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

/// Comma-joined keyword text → lowercased entries, order kept.
pub fn split_keywords(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_lowercase).collect()
}

/// ASCII case-insensitive substring test on raw bytes.
pub fn contains_ci(haystack: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}
