//! Read-only operations on the task list
//!
//! None of these mutate the list or touch storage.

use super::task::{Task, TaskKind};
use super::task_list::TaskList;
use crate::formatting::{
    DEADLINES_LABEL, ERROR_TASK_NO_MATCH_MESSAGE, EVENTS_LABEL, LIST_TASK_MESSAGE,
    TASK_MATCH_FOUND_MESSAGE, date_summary, falls_on, matches_keyword, numbered,
};
use crate::ui::OutputSink;
use chrono::NaiveDate;

impl TaskList {
    /// Print every task, numbered by position
    pub fn list_all(&self, ui: &mut dyn OutputSink) {
        ui.write_line(LIST_TASK_MESSAGE);
        ui.write_lines(&numbered(&self.tasks));
    }

    /// Tasks matching `keyword`, in list order
    pub fn matching_keyword(&self, keyword: &str) -> Vec<&Task> {
        let keyword = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| matches_keyword(task, &keyword))
            .collect()
    }

    /// Deadlines and events on `date`, as two buckets in list order
    pub fn on_date(&self, date: NaiveDate) -> (Vec<&Task>, Vec<&Task>) {
        self.tasks
            .iter()
            .filter(|task| falls_on(task, date))
            .partition(|task| matches!(task.kind(), TaskKind::Deadline { .. }))
    }

    /// Print tasks whose description (or unparsed `by`/`at` text) contains
    /// `keyword`, ignoring case
    ///
    /// Matches are numbered by their position among the matches.
    pub fn find_by_keyword(&self, keyword: &str, ui: &mut dyn OutputSink) {
        let matches = self.matching_keyword(keyword);
        if matches.is_empty() {
            ui.write_line(ERROR_TASK_NO_MATCH_MESSAGE);
            return;
        }

        ui.write_line(TASK_MATCH_FOUND_MESSAGE);
        ui.write_lines(&numbered(matches));
    }

    /// Print deadlines and events falling on `date`
    ///
    /// Tasks whose date could not be parsed are never listed here.
    pub fn find_by_date(&self, date: NaiveDate, ui: &mut dyn OutputSink) {
        let (deadlines, events) = self.on_date(date);
        ui.write_line(&date_summary(deadlines.len(), events.len(), date));

        for (label, bucket) in [(DEADLINES_LABEL, deadlines), (EVENTS_LABEL, events)] {
            if bucket.is_empty() {
                continue;
            }
            ui.write_line(label);
            ui.write_lines(&numbered(bucket));
        }
    }
}
