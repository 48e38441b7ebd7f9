//! Formatting and matching helpers for taskbook
//!
//! This module holds the user-facing message texts, the keyword/date
//! matching rules used by the task list queries, and the numbering helper
//! shared by every listing.

use crate::tasks::{DATE_DISPLAY_FORMAT, Task, TaskKind};
use chrono::NaiveDate;
use std::path::Path;

pub const TASK_ADDED_MESSAGE: &str = "Got it. I've added this task:";
pub const TASK_MARK_AS_DONE_MESSAGE: &str = "Nice! I've marked this task as done:";
pub const TASK_REMOVED_MESSAGE: &str = "Noted. I've removed this task:";
pub const LIST_TASK_MESSAGE: &str = "Here are the tasks in your list:";
pub const TASK_MATCH_FOUND_MESSAGE: &str = "Here are the matching tasks in your list:";
pub const ERROR_TASK_NO_MATCH_MESSAGE: &str = "There are no tasks matching that keyword.";
pub const ERROR_WRITE_TO_FILE_MESSAGE: &str =
    "Unable to save your tasks to file. Your changes are kept for this session only.";
pub const DEADLINES_LABEL: &str = "Deadlines:";
pub const EVENTS_LABEL: &str = "Events:";

/// Startup notice after unreadable lines were dropped from the data file
pub fn skipped_lines_notice(skipped: usize, backup: &Path) -> String {
    format!(
        "{} line{} in your task file could not be read and will be dropped on the next save. \
         The original file was copied to {}.",
        skipped,
        if skipped == 1 { "" } else { "s" },
        backup.display()
    )
}

/// Confirmation line echoing a task under a header
pub fn indented(task: &Task) -> String {
    format!("  {}", task)
}

/// Footer line reporting the size of the list
pub fn total_tasks(count: usize) -> String {
    format!(
        "Now you have {} task{} in the list.",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Summary line for a date search
pub fn date_summary(deadlines: usize, events: usize, date: NaiveDate) -> String {
    format!(
        "You have {} deadline{} and {} event{} on {}.",
        deadlines,
        if deadlines == 1 { "" } else { "s" },
        events,
        if events == 1 { "" } else { "s" },
        date.format(DATE_DISPLAY_FORMAT)
    )
}

/// Render tasks as `"<n>.<rendered form>"`, numbered from 1
pub fn numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<String> {
    tasks
        .into_iter()
        .enumerate()
        .map(|(i, task)| format!("{}.{}", i + 1, task))
        .collect()
}

/// Keyword match (case-insensitive on the task side)
///
/// `keyword` must already be lower-cased. The description is always searched;
/// the `by`/`at` text of deadlines and events is searched only while it is
/// held as raw text.
pub fn matches_keyword(task: &Task, keyword: &str) -> bool {
    if task.description().to_lowercase().contains(keyword) {
        return true;
    }

    task.kind()
        .when()
        .and_then(|when| when.raw_text())
        .is_some_and(|raw| raw.to_lowercase().contains(keyword))
}

/// Whether a deadline or event falls on `date`, ignoring the time of day
///
/// Raw-text fields never match.
pub fn falls_on(task: &Task, date: NaiveDate) -> bool {
    match task.kind() {
        TaskKind::Todo => false,
        TaskKind::Deadline { by: when } | TaskKind::Event { at: when } => {
            when.date().is_some_and(|d| d == date)
        }
    }
}
