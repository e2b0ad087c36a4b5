//! Display implementation for daybook application messages.
//!
//! Converts structured [`Message`] values into the human-readable text
//! shown in the terminal. Keeping every string here means the commands
//! stay free of formatting concerns and the whole catalog can be reviewed
//! (or localized) in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SCHEDULE MESSAGES ===
            Message::ScheduleSaved => "Schedule saved!".to_string(),
            Message::ScheduleHeader => "📅 Current Schedules".to_string(),
            Message::NoSchedules => "No schedules found.".to_string(),
            Message::DayWillBeReplaced(day) => {
                format!("Day '{}' already has a schedule; writing will replace all of its tasks", day)
            }

            // === TASK MESSAGES ===
            Message::TaskUpdated => "Task updated!".to_string(),
            Message::TaskNotFound(task) => format!("Task '{}' not found", task),
            Message::TasksForDay(day) => format!("Tasks for {}", day),

            // === DAY MESSAGES ===
            Message::DayDeleted(day) => format!("Day '{}' deleted!", day),
            Message::DeleteSkipped(day) => format!("Day '{}' left untouched", day),
            Message::DayNotFound(day) => format!("Day '{}' not found", day),

            // === SEARCH MESSAGES ===
            Message::SearchResultsHeader => "🔍 Search Results".to_string(),
            Message::NoMatchFound => "No match found.".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptDayName => "Enter day name".to_string(),
            Message::PromptTaskCount(day) => format!("How many tasks for {}?", day),
            Message::PromptTaskName(index) => format!("Task {} name", index),
            Message::PromptTaskDetail(task) => format!("Details for '{}'", task),
            Message::PromptDayToEdit => "Enter the day name to edit".to_string(),
            Message::PromptTaskToEdit => "Enter the task name to edit".to_string(),
            Message::PromptNewDetail => "Enter new details".to_string(),
            Message::PromptDayToDelete => "Enter the day name to delete".to_string(),
            Message::ConfirmDeleteDay(day) => format!("Are you sure you want to delete '{}'?", day),
            Message::PromptSearchKeyword => "Enter keyword to search".to_string(),
            Message::TaskCountTooSmall => "Please enter a number >= 1".to_string(),

            // === MENU MESSAGES ===
            Message::MenuTitle => "Daily Schedule Menu".to_string(),
            Message::Goodbye => "👋 Goodbye!".to_string(),
        };
        write!(f, "{}", text)
    }
}
