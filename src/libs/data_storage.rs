use anyhow::Result;
use std::env::var;
use std::fs;
use std::path::PathBuf;

/// Default name of the schedule file, created in the data directory the
/// first time a mutation saves.
pub const SCHEDULE_FILE_NAME: &str = "schedule.json";

/// Resolves where daybook keeps its data.
///
/// The data directory is the process working directory unless
/// `DAYBOOK_DATA_DIR` points somewhere else. Tests set the variable to a
/// temporary directory to keep runs isolated.
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = var("DAYBOOK_DATA_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."));

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
