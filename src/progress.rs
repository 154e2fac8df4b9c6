// src/progress.rs
/// Lightweight progress reporting used by the scrape pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the listing is read, with the number of posting links.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One posting page was fetched and parsed.
    fn item_done(&mut self, _role: &str) {}

    /// One posting page was a template page and got dropped.
    fn item_skipped(&mut self, _role: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
