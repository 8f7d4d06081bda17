// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::PROGRESS_EVERY;
use crate::config::options::RunOptions;
use crate::core::net::HttpFetcher;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;

/// Prints the running index every few abstracts, plus begin/end lines.
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Processing {total} abstracts…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, index: usize, number: u32) {
        if index % PROGRESS_EVERY == 0 {
            eprintln!("{index}/{} (#{number})", self.total);
        }
    }

    fn finish(&mut self) {
        eprintln!("Done.");
    }
}

pub fn run() -> Result<()> {
    let opts = parse_args(env::args().skip(1))?;

    crate::file::ensure_directory(&opts.cache_dir)?;
    crate::log::init(&opts.log_path());
    logf!("Run: catalog={} cache={} out={}",
        opts.catalog_url, opts.cache_dir.display(), opts.out_path.display());

    let fetcher = HttpFetcher::new()?;
    let mut progress = CliProgress { total: 0 };
    let summary = match crate::runner::run(&opts, &fetcher, Some(&mut progress)) {
        Ok(s) => s,
        Err(e) => {
            loge!("Run aborted: {e}");
            return Err(e);
        }
    };

    progress.log(&format!(
        "Wrote {} abstracts to {} ({} fetched, {} cached, {} common words dropped)",
        summary.abstracts,
        summary.out_path.display(),
        summary.stats.fetched,
        summary.stats.cached,
        summary.removed_words,
    ));
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<RunOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--cache-dir" => opts.cache_dir = PathBuf::from(value(&mut args, &a)?),
            "-o" | "--out" => opts.out_path = PathBuf::from(value(&mut args, &a)?),
            "--catalog-url" => opts.catalog_url = value(&mut args, &a)?,
            "--detail-url" => opts.detail_url_tmpl = value(&mut args, &a)?,
            "--threshold" => {
                let v = value(&mut args, &a)?;
                opts.threshold = v.parse().map_err(|_| {
                    ScrapeError::Options(format!("--threshold expects a number, got {v:?}"))
                })?;}
            "--limit" => {
                let v = value(&mut args, &a)?;
                opts.limit = Some(v.parse().map_err(|_| {
                    ScrapeError::Options(format!("--limit expects a count, got {v:?}"))
                })?);}
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(ScrapeError::Options(format!("Unknown arg: {a}"))),
        }
    }

    Ok(opts)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| ScrapeError::Options(format!("Missing value for {flag}")))
}
