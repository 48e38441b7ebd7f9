//! Parsing of interactive command lines
//!
//! One command per line; the first word selects the command and the rest of
//! the line is its argument.

use crate::error::{Result, TaskError};
use crate::tasks::Task;
use crate::validation::{parse_date_filter, parse_task_number};
use chrono::NaiveDate;

pub const TODO_USAGE: &str = "todo <description>";
pub const DEADLINE_USAGE: &str = "deadline <description> /by <date/time>";
pub const EVENT_USAGE: &str = "event <description> /at <date/time>";
pub const DONE_USAGE: &str = "done <task number>";
pub const DELETE_USAGE: &str = "delete <task number>";
pub const FIND_USAGE: &str = "find <keyword>";
pub const DATE_USAGE: &str = "date <YYYY-MM-DD>";

/// Command summary shown by `help`
pub const HELP_LINES: &[&str] = &[
    "Here is what I understand:",
    TODO_USAGE,
    DEADLINE_USAGE,
    EVENT_USAGE,
    "list",
    DONE_USAGE,
    DELETE_USAGE,
    FIND_USAGE,
    DATE_USAGE,
    "help",
    "bye",
    "Date/time examples: 2026-10-20 1800, 2026-10-20, 20/10/2026 1800",
];

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    List,
    Done(i64),
    Delete(i64),
    Find(String),
    Date(NaiveDate),
    Help,
    Bye,
}

impl Command {
    /// Parse a single input line
    ///
    /// Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, args) = match line.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (line, ""),
        };

        let command = match word {
            "todo" => Command::Add(Task::todo(args)?),
            "deadline" => {
                let (description, by) = split_on_flag(args, "/by", DEADLINE_USAGE)?;
                Command::Add(Task::deadline(description, by)?)
            }
            "event" => {
                let (description, at) = split_on_flag(args, "/at", EVENT_USAGE)?;
                Command::Add(Task::event(description, at)?)
            }
            "list" => Command::List,
            "done" => Command::Done(parse_task_number(required(args, "task number", DONE_USAGE)?)?),
            "delete" => Command::Delete(parse_task_number(required(
                args,
                "task number",
                DELETE_USAGE,
            )?)?),
            // The keyword is matched as typed, spaces included
            "find" => {
                let keyword = line[word.len()..]
                    .strip_prefix(char::is_whitespace)
                    .unwrap_or_default();
                Command::Find(required(keyword, "keyword", FIND_USAGE)?.to_lowercase())
            }
            "date" => Command::Date(parse_date_filter(required(args, "date", DATE_USAGE)?)?),
            "help" => Command::Help,
            "bye" => Command::Bye,
            other => return Err(TaskError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(arg: &'a str, what: &'static str, usage: &'static str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(TaskError::MissingArgument { what, usage })
    } else {
        Ok(arg)
    }
}

/// Split `"<description> /by <when>"` into its two halves
fn split_on_flag<'a>(
    args: &'a str,
    flag: &'static str,
    usage: &'static str,
) -> Result<(&'a str, &'a str)> {
    let (description, when) = args.split_once(flag).ok_or(TaskError::MissingArgument {
        what: flag,
        usage,
    })?;
    Ok((description.trim(), required(when.trim(), "date/time", usage)?))
}
