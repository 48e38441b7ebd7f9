use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::error::{Result, TaskError};

/// Format used when a date-time is shown to the user or written to disk
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%b %d %Y %H%M";

/// Format used when only the calendar date is shown
pub const DATE_DISPLAY_FORMAT: &str = "%b %d %Y";

/// Accepted date-time input formats, tried in order.
///
/// The display format is included so that a rendered task reads back as the
/// same date-time.
const DATE_TIME_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H%M",
    DATE_TIME_DISPLAY_FORMAT,
];

/// Accepted date-only input formats; the time of day defaults to midnight.
const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", DATE_DISPLAY_FORMAT];

/// The `by`/`at` field of a deadline or event
///
/// Text that parses as a date-time is kept as one; anything else is kept
/// verbatim. Only `DateTime` values take part in date search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum When {
    DateTime(NaiveDateTime),
    Raw(String),
}

impl When {
    /// Parse user or stored text, falling back to raw text
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();

        for format in DATE_TIME_INPUT_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return When::DateTime(dt);
            }
        }

        for format in DATE_INPUT_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return When::DateTime(date.and_time(NaiveTime::MIN));
            }
        }

        When::Raw(trimmed.to_string())
    }

    pub fn has_date_time(&self) -> bool {
        matches!(self, When::DateTime(_))
    }

    /// Calendar date of a parsed value; `None` in raw-text mode
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            When::DateTime(dt) => Some(dt.date()),
            When::Raw(_) => None,
        }
    }

    /// The form this value takes after being rendered and read back
    ///
    /// Date-times lose anything finer than a minute, and raw text that
    /// happens to parse becomes a date-time.
    pub fn normalized(&self) -> Self {
        When::parse(&self.to_string())
    }

    /// Raw text, only when parsing failed
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            When::DateTime(_) => None,
            When::Raw(text) => Some(text),
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            When::DateTime(dt) => write!(f, "{}", dt.format(DATE_TIME_DISPLAY_FORMAT)),
            When::Raw(text) => f.write_str(text),
        }
    }
}

/// Variant-specific part of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: When },
    Event { at: When },
}

impl TaskKind {
    /// One-letter tag used in the rendered form
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Human-readable kind name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Todo => "todo",
            TaskKind::Deadline { .. } => "deadline",
            TaskKind::Event { .. } => "event",
        }
    }

    /// Label of the `by`/`at` qualifier, if this kind carries one
    pub fn qualifier(&self) -> Option<&'static str> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline { .. } => Some("by"),
            TaskKind::Event { .. } => Some("at"),
        }
    }

    /// The `by`/`at` field, if this kind carries one
    pub fn when(&self) -> Option<&When> {
        match self {
            TaskKind::Todo => None,
            TaskKind::Deadline { by } => Some(by),
            TaskKind::Event { at } => Some(at),
        }
    }
}

/// A single trackable item
///
/// The kind and description are fixed at construction; only the completion
/// flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Create a task of the given kind
    ///
    /// The description must not be blank, and no text may span lines. The
    /// `by`/`at` field is normalised so the task reads back from its rendered
    /// form unchanged; raw text containing its own qualifier opener is
    /// rejected for the same reason.
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Result<Self> {
        let description = description.into();
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription(kind.name()));
        }
        if has_line_break(description) {
            return Err(TaskError::LineBreak("description"));
        }

        let kind = match kind {
            TaskKind::Todo => TaskKind::Todo,
            TaskKind::Deadline { by } => TaskKind::Deadline { by: by.normalized() },
            TaskKind::Event { at } => TaskKind::Event { at: at.normalized() },
        };
        if let (Some(label), Some(raw)) = (kind.qualifier(), kind.when().and_then(When::raw_text)) {
            if has_line_break(raw) {
                return Err(TaskError::LineBreak(label));
            }
            // The opener may also follow the rendered "(<label>: " directly
            if format!(" {}", raw).contains(&qualifier_opener(label)) {
                return Err(TaskError::NestedQualifier(label));
            }
        }

        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: &str) -> Result<Self> {
        Self::new(description, TaskKind::Deadline { by: When::parse(by) })
    }

    pub fn event(description: impl Into<String>, at: &str) -> Result<Self> {
        Self::new(description, TaskKind::Event { at: When::parse(at) })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Mark the task as completed. There is no way back.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Builder-style variant of [`Task::mark_done`], used when decoding
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Whether the `by`/`at` field holds a parsed date-time.
    /// Todos have no such field and report `false`.
    pub fn has_date_time(&self) -> bool {
        self.kind.when().is_some_and(When::has_date_time)
    }

    fn status_marker(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }
}

/// Text that introduces the `by`/`at` qualifier in the rendered form
pub(crate) fn qualifier_opener(label: &str) -> String {
    format!(" ({}: ", label)
}

fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_marker(),
            self.description
        )?;
        match (self.kind.qualifier(), self.kind.when()) {
            (Some(label), Some(when)) => write!(f, "{}{})", qualifier_opener(label), when),
            _ => Ok(()),
        }
    }
}
