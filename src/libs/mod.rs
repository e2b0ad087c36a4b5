//! Core library modules for the daybook application.
//!
//! Serves as the entry point for the application's shared infrastructure:
//!
//! - **Data Storage**: Resolution of the schedule file location
//! - **Messaging**: Centralized user-facing message catalog and macros
//! - **User Interface**: Console table rendering

pub mod data_storage;
pub mod messages;
pub mod view;
