//! Validation helper functions for taskbook
//!
//! This module contains validation logic for task numbers and the date
//! argument of a date search.

use crate::error::{Result, TaskError};
use chrono::NaiveDate;

/// Check a 1-based task number against the current list size
///
/// # Arguments
/// * `task_number` - Number as typed by the user (may be zero or negative)
/// * `size` - Current number of tasks
///
/// # Returns
/// The 0-based index into the task list, or `InvalidTaskNumber`
pub fn validate_task_number(task_number: i64, size: usize) -> Result<usize> {
    usize::try_from(task_number)
        .ok()
        .filter(|n| (1..=size).contains(n))
        .map(|n| n - 1)
        .ok_or(TaskError::InvalidTaskNumber(task_number))
}

/// Parse the argument of `done`/`delete` as a task number
pub fn parse_task_number(arg: &str) -> Result<i64> {
    let arg = arg.trim();
    arg.parse::<i64>()
        .map_err(|_| TaskError::NotATaskNumber(arg.to_string()))
}

/// Parse and validate a date search argument
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
pub fn parse_date_filter(date_str: &str) -> Result<NaiveDate> {
    let date_str = date_str.trim();
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TaskError::InvalidDate(date_str.to_string()))
}
