use crate::libs::messages::Message;
use crate::store::schedule::ScheduleStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Day name to write a schedule for
    day: Option<String>,
}

pub fn cmd(store: &ScheduleStore, args: AddArgs) -> Result<()> {
    run(store, args.day)
}

/// Collects a day name and its tasks, then writes the day. Re-adding an
/// existing day replaces all of its tasks, so the user is warned first.
/// All input is gathered before the store operation runs.
pub(crate) fn run(store: &ScheduleStore, day: Option<String>) -> Result<()> {
    let day = match day {
        Some(day) => day,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayName.to_string())
            .interact_text()?,
    };

    if store.show_all()?.contains_key(&day) {
        msg_warning!(Message::DayWillBeReplaced(day.clone()));
    }

    let tasks = collect_tasks(&day)?;
    store.add_day(&day, tasks)?;
    msg_success!(Message::ScheduleSaved);
    Ok(())
}

/// Prompts for a task count (at least 1) and that many name/detail pairs.
fn collect_tasks(day: &str) -> Result<Vec<(String, String)>> {
    let count: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCount(day.to_string()).to_string())
        .validate_with(|count: &usize| {
            if *count >= 1 {
                Ok(())
            } else {
                Err(Message::TaskCountTooSmall.to_string())
            }
        })
        .interact_text()?;

    let mut tasks = Vec::with_capacity(count);
    for index in 1..=count {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName(index).to_string())
            .interact_text()?;
        let detail: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDetail(name.clone()).to_string())
            .allow_empty(true)
            .interact_text()?;
        tasks.push((name, detail));
    }
    Ok(tasks)
}
