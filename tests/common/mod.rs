//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::{Result, bail};
use taskbook::{OutputSink, Task, TaskStore};

/// Output sink that records everything written to it
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.errors.clear();
    }
}

impl OutputSink for RecordingSink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn write_error(&mut self, text: &str) {
        self.errors.push(text.to_string());
    }
}

/// In-memory store keeping every snapshot it was asked to write
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub writes: Vec<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_write(&self) -> Option<&Vec<String>> {
        self.writes.last()
    }
}

impl TaskStore for MemoryStore {
    fn write_all(&mut self, tasks: &[Task]) -> Result<()> {
        self.writes
            .push(tasks.iter().map(|t| t.to_string()).collect());
        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }
}

/// Store whose writes always fail
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: usize,
}

impl TaskStore for FailingStore {
    fn write_all(&mut self, _tasks: &[Task]) -> Result<()> {
        self.attempts += 1;
        bail!("disk full")
    }

    fn load_all(&mut self) -> Result<Vec<Task>> {
        Ok(Vec::new())
    }
}

pub fn todo(description: &str) -> Task {
    Task::todo(description).unwrap()
}

pub fn rendered(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|t| t.to_string()).collect()
}
