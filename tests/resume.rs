// tests/resume.rs
mod common;

use abstract_scrape::progress::NullProgress;
use abstract_scrape::runner::{collect_catalog, extract_all, extract_one, filter_all};
use abstract_scrape::store::PageCache;

use common::*;

#[test]
fn extracted_record_is_left_alone() {
    let dir = tmp_dir("resume_one");
    let opts = options(&dir);
    let mut fetcher = StubFetcher::default();
    fetcher.add(CATALOG, catalog(&[7]));
    fetcher.add(detail_url(0), page("Smith J1", "Alpha beta.", &["X"]));

    let cache = PageCache::new(&opts.cache_dir);
    let mut records = collect_catalog(&opts, &fetcher).unwrap();
    assert!(extract_one(&mut records[0], &cache, &fetcher).unwrap().is_some());
    let snapshot = records[0].clone();

    // Page disappears everywhere; a second extraction must not need it.
    std::fs::remove_dir_all(&opts.cache_dir).unwrap();
    fetcher.pages.clear();
    assert!(extract_one(&mut records[0], &cache, &fetcher).unwrap().is_none());
    assert_eq!(records[0], snapshot);
}

#[test]
fn interrupted_pass_resumes_and_counts_everything() {
    let dir = tmp_dir("resume_pass");
    let opts = options(&dir);
    let mut fetcher = StubFetcher::default();
    fetcher.add(CATALOG, catalog(&[1, 2, 3, 4]));
    fetcher.add(detail_url(0), page("A", "shared one.", &[]));
    fetcher.add(detail_url(1), page("B", "shared two.", &[]));
    fetcher.add(detail_url(3), page("D", "four.", &[]));

    let cache = PageCache::new(&opts.cache_dir);
    let mut records = collect_catalog(&opts, &fetcher).unwrap();

    assert!(extract_all(&mut records, &cache, &fetcher, &mut NullProgress).is_err());
    assert!(records[0].is_extracted() && records[1].is_extracted());
    assert!(!records[2].is_extracted());

    fetcher.add(detail_url(2), page("C", "three.", &[]));
    let (stats, counts) = extract_all(&mut records, &cache, &fetcher, &mut NullProgress).unwrap();
    assert_eq!(stats.resumed, 2);
    assert_eq!(stats.fetched, 2);
    assert_eq!(counts.count("shared"), 2);

    // 2 of 4 > 25%
    let removed = filter_all(&mut records, counts, opts.threshold);
    assert_eq!(removed, 1);
    assert_eq!(records[0].body, Some(vec!["one".to_string()]));
    assert_eq!(records[2].body, Some(vec!["three".to_string()]));
}
