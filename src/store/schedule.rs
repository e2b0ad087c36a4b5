//! The schedule store: a day → task → detail mapping persisted as JSON.
//!
//! Each public operation performs a self-contained load-mutate-save cycle
//! against the backing file. There is exactly one caller and one session,
//! so no locking is involved; durability comes from rewriting the full
//! schedule into a sibling temp file and renaming it into place.

use crate::libs::data_storage::{DataStorage, SCHEDULE_FILE_NAME};
use crate::msg_debug;
use crate::store::error::StoreError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Tasks of a single day: task name → free-text detail.
///
/// Task names are unique within a day; insertion order is preserved
/// across save/load cycles and drives display order.
pub type DaySchedule = IndexMap<String, String>;

/// The full schedule: day name → [`DaySchedule`].
pub type Schedule = IndexMap<String, DaySchedule>;

/// One hit returned by [`ScheduleStore::search`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub day: String,
    pub task: String,
    pub detail: String,
}

/// Owns the backing schedule file and the operations over it.
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    /// Creates a store over the default backing file, `schedule.json` in
    /// the resolved data directory.
    pub fn new() -> anyhow::Result<Self> {
        let path = DataStorage::new().get_path(SCHEDULE_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Creates a store over an explicit backing file. Used by the `--file`
    /// CLI option and by tests to isolate the schedule location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes the backing file into a [`Schedule`].
    ///
    /// A missing file is an empty schedule, not an error. A file that
    /// exists but does not decode into the expected shape surfaces as
    /// [`StoreError::CorruptData`].
    pub fn load(&self) -> Result<Schedule, StoreError> {
        if !self.path.exists() {
            return Ok(Schedule::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|source| StoreError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        let schedule: Schedule = serde_json::from_str(&text).map_err(|source| StoreError::CorruptData {
            path: self.path.clone(),
            source,
        })?;
        msg_debug!(format!("loaded {} day(s) from {}", schedule.len(), self.path.display()));
        Ok(schedule)
    }

    /// Serializes the full schedule and durably overwrites the backing
    /// file in one logical step: write a sibling temp file, then rename
    /// it into place, so a concurrent `load` never sees a truncated file.
    fn save(&self, schedule: &Schedule) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(schedule)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .map_err(|source| StoreError::Persistence {
                path: self.path.clone(),
                source,
            })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let persist = |source| StoreError::Persistence {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(persist)?;
            }
        }
        fs::write(&tmp, text).map_err(persist)?;
        fs::rename(&tmp, &self.path).map_err(persist)?;
        msg_debug!(format!("saved {} day(s) to {}", schedule.len(), self.path.display()));
        Ok(())
    }

    /// Records a day's schedule. If the day already exists its tasks are
    /// replaced wholesale, never merged. Duplicate task names in the input
    /// keep the position of the first occurrence and the detail of the
    /// last, matching plain map insertion.
    pub fn add_day(&self, day: &str, tasks: Vec<(String, String)>) -> Result<(), StoreError> {
        let mut schedule = self.load()?;
        let mut day_tasks = DaySchedule::with_capacity(tasks.len());
        for (name, detail) in tasks {
            day_tasks.insert(name, detail);
        }
        schedule.insert(day.to_string(), day_tasks);
        self.save(&schedule)
    }

    /// Returns the full schedule in insertion order. Pure read.
    pub fn show_all(&self) -> Result<Schedule, StoreError> {
        self.load()
    }

    /// Overwrites the detail of one task, keeping its position within the
    /// day. Fails with `DayNotFound`/`TaskNotFound` on a lookup miss and
    /// leaves the backing file untouched in that case.
    pub fn edit_task(&self, day: &str, task: &str, new_detail: &str) -> Result<(), StoreError> {
        let mut schedule = self.load()?;
        let day_tasks = schedule
            .get_mut(day)
            .ok_or_else(|| StoreError::DayNotFound(day.to_string()))?;
        let detail = day_tasks.get_mut(task).ok_or_else(|| StoreError::TaskNotFound {
            day: day.to_string(),
            task: task.to_string(),
        })?;
        *detail = new_detail.to_string();
        self.save(&schedule)
    }

    /// Removes a whole day and all of its tasks.
    ///
    /// Confirmation is an explicit parameter so the interactive yes/no
    /// prompt stays outside the store. An unconfirmed delete of an
    /// existing day is a no-op that returns `Ok(false)` without saving;
    /// a confirmed delete saves and returns `Ok(true)`.
    pub fn delete_day(&self, day: &str, confirmed: bool) -> Result<bool, StoreError> {
        let mut schedule = self.load()?;
        if !schedule.contains_key(day) {
            return Err(StoreError::DayNotFound(day.to_string()));
        }
        if !confirmed {
            return Ok(false);
        }
        schedule.shift_remove(day);
        self.save(&schedule)?;
        Ok(true)
    }

    /// Case-insensitive substring search over task names and details.
    ///
    /// Day names are not searched. An empty keyword matches every task.
    /// Results come back in store iteration order; no match is an empty
    /// vec, never an error.
    pub fn search(&self, keyword: &str) -> Result<Vec<SearchMatch>, StoreError> {
        let schedule = self.load()?;
        let needle = keyword.to_lowercase();
        let mut matches = Vec::new();
        for (day, tasks) in &schedule {
            for (task, detail) in tasks {
                if task.to_lowercase().contains(&needle) || detail.to_lowercase().contains(&needle) {
                    matches.push(SearchMatch {
                        day: day.clone(),
                        task: task.clone(),
                        detail: detail.clone(),
                    });
                }
            }
        }
        Ok(matches)
    }
}
