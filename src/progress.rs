// src/progress.rs
/// Lightweight progress reporting for the load step.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when the fetch starts.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once parsing and normalization are done.
    fn loaded(&mut self, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
