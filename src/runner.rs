// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::RunOptions,
    core::net::Fetch,
    corpus::WordCounts,
    data::Abstract,
    file::write_export,
    progress::{NullProgress, Progress},
    specs::{abstract_page::extract_fields, catalog::parse_catalog},
    store::{PageCache, PageSource},
    error::Result,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub abstracts: usize,
    pub removed_words: usize,
    pub stats: ExtractStats,
}

/// Where each abstract's page came from during extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub fetched: usize,
    pub cached: usize,
    /// Already extracted before this pass; neither read nor re-parsed.
    pub resumed: usize,
}

/// Top-level driver: catalog → extract every abstract → filter → write.
/// Options are validated here, before the first request. Any fetch failure aborts
/// the run before anything is written.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    opts.validate()?;

    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let mut records = collect_catalog(opts, fetcher)?;
    if let Some(limit) = opts.limit {
        records.truncate(limit);
    }
    logf!("Catalog: {} abstracts", records.len());

    progress.begin(records.len());

    let cache = PageCache::new(&opts.cache_dir);
    let (stats, counts) = extract_all(&mut records, &cache, fetcher, &mut *progress)?;

    // Every abstract is accumulated before the removal set exists.
    let removed_words = filter_all(&mut records, counts, opts.threshold);
    logf!("Dropping {removed_words} words common to more than {} of abstracts", opts.threshold);

    let out_path = write_export(&opts.out_path, &records)?;
    logf!("Wrote {} abstracts to {}", records.len(), out_path.display());

    progress.finish();

    Ok(RunSummary { out_path, abstracts: records.len(), removed_words, stats })
}

/// Fetch the catalog page and build one bare record per entry, in page order.
pub fn collect_catalog(opts: &RunOptions, fetcher: &dyn Fetch) -> Result<Vec<Abstract>> {
    let raw = fetcher.get(&opts.catalog_url)?;
    let entries = parse_catalog(&raw)?;
    Ok(entries
        .into_iter()
        .map(|e| Abstract::new(e.number, opts.detail_url(&e.detail_id)))
        .collect())
}

/// First pass: extract every record not yet extracted and count every record's raw
/// word set. Records extracted by an earlier, interrupted pass are kept as they are
/// but still counted, so the returned counts always cover the whole corpus. A failed
/// pass returns no counts; call again with the same records to resume.
pub fn extract_all(
    records: &mut [Abstract],
    cache: &PageCache,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<(ExtractStats, WordCounts)> {
    let mut stats = ExtractStats::default();
    let mut counts = WordCounts::new();

    for (i, record) in records.iter_mut().enumerate() {
        match extract_one(record, cache, fetcher)? {
            Some(PageSource::Network) => stats.fetched += 1,
            Some(PageSource::Cache) => stats.cached += 1,
            None => stats.resumed += 1,
        }
        if let Some(words) = &record.words {
            counts.accumulate(words);
        }
        progress.item_done(i, record.number);
    }

    logd!(
        "Extraction: {} fetched, {} cached, {} resumed, {} distinct words",
        stats.fetched, stats.cached, stats.resumed, counts.distinct_words()
    );
    Ok((stats, counts))
}

/// Extract one record in place. Returns `None` when the record was already extracted.
pub fn extract_one(
    record: &mut Abstract,
    cache: &PageCache,
    fetcher: &dyn Fetch,
) -> Result<Option<PageSource>> {
    if record.is_extracted() {
        return Ok(None);
    }
    let (raw, source) = cache.load_or_fetch(record.number, &record.url, fetcher)?;
    extract_fields(&raw).apply_to(record);
    Ok(Some(source))
}

/// Second pass: drop words shared by too many abstracts from every record.
/// Consumes `counts`. Returns the number of words dropped corpus-wide.
pub fn filter_all(records: &mut [Abstract], counts: WordCounts, threshold: f64) -> usize {
    let removal = counts.into_removal_set(records.len(), threshold);
    for record in records.iter_mut() {
        record.finalize_words(&removal);
    }
    removal.len()
}
