//! # Daybook - Daily Schedule Tracker
//!
//! A command-line utility for keeping a per-day schedule of named tasks,
//! each with a free-text detail string.
//!
//! ## Features
//!
//! - **Schedule Writing**: Record a named day together with its tasks
//! - **Schedule Review**: List every saved day and its tasks in order
//! - **Task Editing**: Rewrite the detail of a single task in place
//! - **Day Deletion**: Remove a whole day after explicit confirmation
//! - **Keyword Search**: Case-insensitive search across task names and details
//! - **Interactive Menu**: A guided menu loop for all of the above
//!
//! All data lives in a single JSON file (`schedule.json` by default). Every
//! mutation rewrites the file completely and atomically, so a reader never
//! observes a partially written schedule.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use daybook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
