use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::schedule::ScheduleStore;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword to look for in task names and details
    keyword: Option<String>,
}

pub fn cmd(store: &ScheduleStore, args: SearchArgs) -> Result<()> {
    run(store, args.keyword)
}

/// Case-insensitive keyword search across task names and details. An
/// empty keyword matches every task; no match is reported, not an error.
pub(crate) fn run(store: &ScheduleStore, keyword: Option<String>) -> Result<()> {
    if store.show_all()?.is_empty() {
        msg_info!(Message::NoSchedules);
        return Ok(());
    }

    let keyword = match keyword {
        Some(keyword) => keyword,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSearchKeyword.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let matches = store.search(&keyword)?;
    if matches.is_empty() {
        msg_error!(Message::NoMatchFound);
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader, true);
    View::matches(&matches)?;
    Ok(())
}
