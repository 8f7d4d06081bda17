// src/progress.rs
/// Lightweight progress reporting for the scrape run.
/// The CLI implements this to print status; library callers can pass `None`.
pub trait Progress {
    /// Called once the catalog is known, with the number of abstracts to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each abstract; `index` is its 0-based position in the run.
    fn item_done(&mut self, _index: usize, _number: u32) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
