use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures produced by [`crate::store::schedule::ScheduleStore`] operations.
///
/// The lookup variants (`DayNotFound`, `TaskNotFound`) are ordinary
/// outcomes the interactive shell reports and moves past. `CorruptData`
/// and `Persistence` mean the backing file can no longer be trusted and
/// should end the session instead of being swallowed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The schedule file exists but does not decode into a day → task →
    /// detail mapping. Never silently replaced with an empty schedule.
    #[error("schedule file '{}' is corrupted: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or durably rewriting the schedule file failed. The
    /// in-memory mutation that triggered the write is not committed.
    #[error("failed to persist schedule file '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("day '{0}' not found")]
    DayNotFound(String),

    #[error("task '{task}' not found for day '{day}'")]
    TaskNotFound { day: String, task: String },
}
