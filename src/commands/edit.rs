use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::error::StoreError;
use crate::store::schedule::ScheduleStore;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Day name containing the task
    day: Option<String>,
    /// Task name whose details should change
    task: Option<String>,
}

pub fn cmd(store: &ScheduleStore, args: EditArgs) -> Result<()> {
    run(store, args.day, args.task)
}

/// Shows the chosen day's tasks, collects a task name and new details,
/// then rewrites that single detail. Lookup misses are reported and the
/// session continues; they never abort the menu loop.
pub(crate) fn run(store: &ScheduleStore, day: Option<String>, task: Option<String>) -> Result<()> {
    let schedule = store.show_all()?;
    if schedule.is_empty() {
        msg_info!(Message::NoSchedules);
        return Ok(());
    }

    let day = match day {
        Some(day) => day,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayToEdit.to_string())
            .interact_text()?,
    };
    let tasks = match schedule.get(&day) {
        Some(tasks) => tasks,
        None => {
            msg_error!(Message::DayNotFound(day));
            return Ok(());
        }
    };

    msg_print!(Message::TasksForDay(day.clone()), true);
    View::day(tasks)?;

    let task = match task {
        Some(task) => task,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskToEdit.to_string())
            .interact_text()?,
    };
    if !tasks.contains_key(&task) {
        msg_error!(Message::TaskNotFound(task));
        return Ok(());
    }

    let new_detail: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptNewDetail.to_string())
        .allow_empty(true)
        .interact_text()?;

    // The store reloads before mutating, so revalidate its outcome: the
    // file may have changed between the snapshot above and this call.
    match store.edit_task(&day, &task, &new_detail) {
        Ok(()) => msg_success!(Message::TaskUpdated),
        Err(StoreError::DayNotFound(day)) => msg_error!(Message::DayNotFound(day)),
        Err(StoreError::TaskNotFound { task, .. }) => msg_error!(Message::TaskNotFound(task)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
