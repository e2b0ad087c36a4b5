use crate::store::schedule::{DaySchedule, Schedule, SearchMatch};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the whole schedule, day by day, in insertion order.
    pub fn schedule(schedule: &Schedule) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TASK", "DETAILS"]);
        for (day, tasks) in schedule {
            for (task, detail) in tasks {
                table.add_row(row![day, task, detail]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Renders the tasks of a single day.
    pub fn day(tasks: &DaySchedule) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "DETAILS"]);
        for (task, detail) in tasks {
            table.add_row(row![task, detail]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders keyword search results in store iteration order.
    pub fn matches(matches: &[SearchMatch]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "TASK", "DETAILS"]);
        for m in matches {
            table.add_row(row![m.day, m.task, m.detail]);
        }
        table.printstd();

        Ok(())
    }
}
