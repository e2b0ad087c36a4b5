use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::schedule::ScheduleStore;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd(store: &ScheduleStore) -> Result<()> {
    run(store)
}

pub(crate) fn run(store: &ScheduleStore) -> Result<()> {
    let schedule = store.show_all()?;
    if schedule.is_empty() {
        msg_info!(Message::NoSchedules);
        return Ok(());
    }

    msg_print!(Message::ScheduleHeader, true);
    View::schedule(&schedule)?;
    Ok(())
}
