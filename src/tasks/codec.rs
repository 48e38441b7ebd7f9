//! Reading a task back from its rendered form
//!
//! The storage file holds one rendered task per line, so decoding is the
//! inverse of `Display for Task`.

use super::task::{Task, TaskKind, When, qualifier_opener};
use std::str::FromStr;

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| format!("{}: '{}'", reason, s);

        let mut chars = s.chars();
        if chars.next() != Some('[') {
            return Err(malformed("missing type marker"));
        }
        let tag = chars.next().ok_or_else(|| malformed("missing type marker"))?;
        if chars.next() != Some(']') || chars.next() != Some('[') {
            return Err(malformed("missing status marker"));
        }
        let done = match chars.next() {
            Some('X') => true,
            Some(' ') => false,
            _ => return Err(malformed("unknown status marker")),
        };
        if chars.next() != Some(']') || chars.next() != Some(' ') {
            return Err(malformed("missing description"));
        }
        let body = chars.as_str();

        let task = match tag {
            'T' => Task::new(body, TaskKind::Todo),
            'D' => {
                let (description, by) =
                    split_qualifier(body, "by").ok_or_else(|| malformed("missing '(by: ...)'"))?;
                Task::new(description, TaskKind::Deadline { by: When::parse(by) })
            }
            'E' => {
                let (description, at) =
                    split_qualifier(body, "at").ok_or_else(|| malformed("missing '(at: ...)'"))?;
                Task::new(description, TaskKind::Event { at: When::parse(at) })
            }
            other => return Err(malformed(&format!("unknown task type '{}'", other))),
        };

        task.map(|t| t.with_done(done)).map_err(|e| malformed(&e.to_string()))
    }
}

/// Split `"<description> (<label>: <value>)"` at the last qualifier
fn split_qualifier<'a>(body: &'a str, label: &str) -> Option<(&'a str, &'a str)> {
    let opener = qualifier_opener(label);
    let inner = body.strip_suffix(')')?;
    let pos = inner.rfind(&opener)?;
    Some((&inner[..pos], &inner[pos + opener.len()..]))
}
