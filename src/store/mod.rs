//! Persistence layer for the daybook application.
//!
//! The whole schedule lives in a single JSON file shaped as a two-level
//! mapping: day name → (task name → detail). [`schedule::ScheduleStore`]
//! owns the backing file and exposes the five operations the CLI is built
//! on: write a day, review everything, edit a task, delete a day, and
//! search by keyword. Every mutation is a complete load-mutate-save cycle
//! that rewrites the file atomically.

pub mod error;
pub mod schedule;
