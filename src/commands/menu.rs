use crate::commands::{add, delete, edit, search, show};
use crate::libs::messages::Message;
use crate::msg_print;
use crate::store::schedule::ScheduleStore;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const MENU_ITEMS: &[&str] = &[
    "Write your daily schedule",
    "Edit your daily schedule",
    "Delete a daily schedule",
    "Review the current schedule",
    "Search in schedules",
    "Exit",
];

/// The interactive menu loop: one store operation per selection, looping
/// until Exit. Lookup misses are handled inside the handlers, so only
/// persistence or decoding failures break out of the loop.
pub fn cmd(store: &ScheduleStore) -> Result<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuTitle.to_string())
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => add::run(store, None)?,
            1 => edit::run(store, None, None)?,
            2 => delete::run(store, None, false)?,
            3 => show::run(store)?,
            4 => search::run(store, None)?,
            _ => break,
        }
    }

    msg_print!(Message::Goodbye);
    Ok(())
}
