pub mod add;
pub mod delete;
pub mod edit;
pub mod menu;
pub mod search;
pub mod show;

use crate::store::schedule::ScheduleStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write a daily schedule")]
    Add(add::AddArgs),
    #[command(about = "Review the current schedule")]
    Show,
    #[command(about = "Edit a task in a daily schedule")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a daily schedule")]
    Delete(delete::DeleteArgs),
    #[command(about = "Search schedules by keyword")]
    Search(search::SearchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the schedule file (defaults to schedule.json in the data directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parses the command line and dispatches. Without a subcommand the
    /// interactive menu loop runs, mirroring the original shell.
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let store = match cli.file {
            Some(path) => ScheduleStore::with_path(path),
            None => ScheduleStore::new()?,
        };
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(&store, args),
            Some(Commands::Show) => show::cmd(&store),
            Some(Commands::Edit(args)) => edit::cmd(&store, args),
            Some(Commands::Delete(args)) => delete::cmd(&store, args),
            Some(Commands::Search(args)) => search::cmd(&store, args),
            None => menu::cmd(&store),
        }
    }
}
