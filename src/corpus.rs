// src/corpus.rs
// Corpus-wide document frequency.
//
// Two phases, in this order:
//   1. `accumulate` once per abstract with its *raw* word set.
//   2. `into_removal_set` once, after every abstract was accumulated.
// Phase 2 takes `self` by value, so counts cannot move after the removal set exists.

use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct WordCounts {
    counts: HashMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word of one abstract once.
    pub fn accumulate(&mut self, words: &HashSet<String>) {
        for w in words {
            *self.counts.entry(w.clone()).or_insert(0) += 1;
        }
    }

    /// Number of abstracts containing `word`.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Words found in strictly more than `threshold * total_docs` abstracts.
    pub fn into_removal_set(self, total_docs: usize, threshold: f64) -> HashSet<String> {
        let limit = threshold * total_docs as f64;
        self.counts
            .into_iter()
            .filter(|(_, n)| *n as f64 > limit)
            .map(|(w, _)| w)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| s!(*w)).collect()
    }

    #[test]
    fn counts_documents_not_occurrences() {
        let mut wc = WordCounts::new();
        wc.accumulate(&doc(&["brain", "scan"]));
        wc.accumulate(&doc(&["brain"]));
        assert_eq!(wc.count("brain"), 2);
        assert_eq!(wc.count("scan"), 1);
        assert_eq!(wc.count("missing"), 0);
        assert_eq!(wc.distinct_words(), 2);
    }

    #[test]
    fn forty_percent_is_removed() {
        let mut wc = WordCounts::new();
        for i in 0..10 {
            let unique = format!("unique{i}");
            let mut words = doc(&[unique.as_str()]);
            if i < 4 {
                words.insert(s!("brain"));
            }
            wc.accumulate(&words);
        }
        let removal = wc.into_removal_set(10, 0.25);
        assert!(removal.contains("brain"));
        assert!(!removal.contains("unique0"));
        assert_eq!(removal.len(), 1);
    }

    #[test]
    fn exactly_at_threshold_is_kept() {
        let mut wc = WordCounts::new();
        for i in 0..8 {
            let words = if i < 2 { doc(&["edge"]) } else { doc(&[]) };
            wc.accumulate(&words);
        }
        // 2 == 0.25 * 8
        assert!(wc.clone().into_removal_set(8, 0.25).is_empty());
        // 2 > 0.25 * 7
        assert!(wc.into_removal_set(7, 0.25).contains("edge"));
    }

    #[test]
    fn empty_corpus_removes_nothing() {
        assert!(WordCounts::new().into_removal_set(0, 0.25).is_empty());
    }
}
