use super::task::Task;
use crate::error::Result;
use crate::formatting::{
    ERROR_WRITE_TO_FILE_MESSAGE, TASK_ADDED_MESSAGE, TASK_MARK_AS_DONE_MESSAGE,
    TASK_REMOVED_MESSAGE, indented, total_tasks,
};
use crate::storage::TaskStore;
use crate::ui::OutputSink;
use crate::validation::validate_task_number;

/// The ordered task collection
///
/// Position in `tasks` is the only identity a task has: task number N
/// always means `tasks[N - 1]` at the time of the call, so deleting a task
/// renumbers everything after it.
///
/// Every mutation is followed by a full rewrite through the [`TaskStore`].
/// A failed write is reported to the user but the in-memory change is kept;
/// mutation and persistence are intentionally not transactional.
#[derive(Debug, Default)]
pub struct TaskList {
    pub(crate) tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a task list from previously stored tasks
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get the task with the given 1-based number
    pub fn get(&self, task_number: i64) -> Result<&Task> {
        let index = validate_task_number(task_number, self.tasks.len())?;
        Ok(&self.tasks[index])
    }

    /// Append a task and persist the list
    pub fn add(&mut self, task: Task, ui: &mut dyn OutputSink, store: &mut dyn TaskStore) {
        self.tasks.push(task);
        let added = &self.tasks[self.tasks.len() - 1];
        ui.write_lines(&[
            TASK_ADDED_MESSAGE.to_string(),
            indented(added),
            total_tasks(self.tasks.len()),
        ]);
        self.persist(ui, store);
    }

    /// Mark the task with the given number as done and persist the list
    ///
    /// Marking an already completed task again is harmless.
    pub fn mark_done(
        &mut self,
        task_number: i64,
        ui: &mut dyn OutputSink,
        store: &mut dyn TaskStore,
    ) {
        let index = match validate_task_number(task_number, self.tasks.len()) {
            Ok(index) => index,
            Err(e) => {
                ui.write_error(&e.to_string());
                return;
            }
        };

        let task = &mut self.tasks[index];
        task.mark_done();
        ui.write_lines(&[TASK_MARK_AS_DONE_MESSAGE.to_string(), indented(task)]);
        self.persist(ui, store);
    }

    /// Remove the task with the given number and persist the list
    pub fn delete(&mut self, task_number: i64, ui: &mut dyn OutputSink, store: &mut dyn TaskStore) {
        let index = match validate_task_number(task_number, self.tasks.len()) {
            Ok(index) => index,
            Err(e) => {
                ui.write_error(&e.to_string());
                return;
            }
        };

        let removed = self.tasks.remove(index);
        ui.write_lines(&[
            TASK_REMOVED_MESSAGE.to_string(),
            indented(&removed),
            total_tasks(self.tasks.len()),
        ]);
        self.persist(ui, store);
    }

    fn persist(&self, ui: &mut dyn OutputSink, store: &mut dyn TaskStore) {
        if let Err(e) = store.write_all(&self.tasks) {
            tracing::warn!("failed to persist {} task(s): {:#}", self.tasks.len(), e);
            ui.write_error(ERROR_WRITE_TO_FILE_MESSAGE);
        }
    }
}
