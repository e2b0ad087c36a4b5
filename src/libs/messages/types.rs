/// All user-facing message variants for the daybook application.
///
/// Commands never format display strings themselves; they pick a variant
/// and hand it to one of the `msg_*` macros. The text for each variant
/// lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === SCHEDULE MESSAGES ===
    ScheduleSaved,
    ScheduleHeader,
    NoSchedules,
    DayWillBeReplaced(String),

    // === TASK MESSAGES ===
    TaskUpdated,
    TaskNotFound(String),
    TasksForDay(String),

    // === DAY MESSAGES ===
    DayDeleted(String),
    DeleteSkipped(String),
    DayNotFound(String),

    // === SEARCH MESSAGES ===
    SearchResultsHeader,
    NoMatchFound,

    // === PROMPT MESSAGES ===
    PromptDayName,
    PromptTaskCount(String),
    PromptTaskName(usize),
    PromptTaskDetail(String),
    PromptDayToEdit,
    PromptTaskToEdit,
    PromptNewDetail,
    PromptDayToDelete,
    ConfirmDeleteDay(String),
    PromptSearchKeyword,
    TaskCountTooSmall,

    // === MENU MESSAGES ===
    MenuTitle,
    Goodbye,
}
