//! Task domain model and the task list
//!
//! - `task`: the `Task` entity, its kinds and the parse-or-raw `When` field
//! - `codec`: reading a task back from its rendered form
//! - `task_list`: the ordered list and its mutating operations
//! - `queries`: listing and searching the task list

mod codec;
mod queries;
mod task;
mod task_list;

pub use task::{DATE_DISPLAY_FORMAT, DATE_TIME_DISPLAY_FORMAT, Task, TaskKind, When};
pub use task_list::TaskList;
