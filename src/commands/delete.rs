use crate::libs::messages::Message;
use crate::store::error::StoreError;
use crate::store::schedule::ScheduleStore;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Day name to delete
    day: Option<String>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(store: &ScheduleStore, args: DeleteArgs) -> Result<()> {
    run(store, args.day, args.yes)
}

/// Deletes a whole day after confirmation. The answer is collected here
/// and passed to the store as an explicit boolean; a declined prompt is
/// handed over as `confirmed = false` so the store performs no write.
pub(crate) fn run(store: &ScheduleStore, day: Option<String>, yes: bool) -> Result<()> {
    let schedule = store.show_all()?;
    if schedule.is_empty() {
        msg_info!(Message::NoSchedules);
        return Ok(());
    }

    let day = match day {
        Some(day) => day,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDayToDelete.to_string())
            .interact_text()?,
    };
    if !schedule.contains_key(&day) {
        msg_error!(Message::DayNotFound(day));
        return Ok(());
    }

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteDay(day.clone()).to_string())
            .default(false)
            .interact()?;

    match store.delete_day(&day, confirmed) {
        Ok(true) => msg_success!(Message::DayDeleted(day)),
        Ok(false) => msg_info!(Message::DeleteSkipped(day)),
        Err(StoreError::DayNotFound(day)) => msg_error!(Message::DayNotFound(day)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
