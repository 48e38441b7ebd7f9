//! Error types for taskbook
//!
//! Domain and command errors are modelled as a `thiserror` enum so that the
//! session can report them to the user verbatim. I/O seams (storage, git,
//! configuration) use `anyhow` instead.

use thiserror::Error;

/// Everything that can go wrong while handling a single user command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("The description of a {0} cannot be empty.")]
    EmptyDescription(&'static str),

    #[error("The {0} cannot span more than one line.")]
    LineBreak(&'static str),

    #[error("The '{0}' text cannot itself contain '({0}: '.")]
    NestedQualifier(&'static str),

    #[error("Task number {0} does not exist in your list.")]
    InvalidTaskNumber(i64),

    #[error("Sorry, I don't know what '{0}' means. Type 'help' to see the commands.")]
    UnknownCommand(String),

    #[error("Missing {what}. Usage: {usage}")]
    MissingArgument {
        what: &'static str,
        usage: &'static str,
    },

    #[error("'{0}' is not a task number.")]
    NotATaskNumber(String),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD (e.g., '2026-03-15')")]
    InvalidDate(String),

    #[error("Line {line}: cannot read task from '{text}' ({reason})")]
    MalformedRecord {
        line: usize,
        text: String,
        reason: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
