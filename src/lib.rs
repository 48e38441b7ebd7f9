//! taskbook library
//!
//! A line-oriented personal task tracker. Users type short commands to add,
//! complete, delete, list and search todos, deadlines and events; the list is
//! rewritten to a plain-text file after every change.
//!
//! # Architecture
//!
//! - **Session layer**: [`Session`] - reads command lines and dispatches them
//! - **Domain layer**: `tasks` module - task model and the task list
//! - **Persistence layer**: `storage` module - plain-text storage with optional git sync
//!
//! # Example
//!
//! ```no_run
//! use taskbook::{Config, Session};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new(&Config::default())?;
//!     session.run(std::io::stdin().lock())?;
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
mod git_ops;
pub mod storage;
pub mod tasks;
pub mod ui;
pub mod validation;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

pub use commands::Command;
pub use config::Config;
pub use error::TaskError;
pub use git_ops::GitOps;
pub use storage::{Storage, TaskStore};
pub use tasks::{Task, TaskKind, TaskList, When};
pub use ui::{OutputSink, TextUi};

const GREETING: &str = "Hello! I'm taskbook. What can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// One interactive run: the task list, its storage and the console
pub struct Session<W: Write> {
    tasks: TaskList,
    storage: Storage,
    ui: TextUi<W>,
}

impl Session<io::Stdout> {
    /// Create a session printing to stdout
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Session<W> {
    /// Create a session printing to `out`, loading tasks from the configured file
    pub fn with_output(config: &Config, out: W) -> Result<Self> {
        let mut storage = Storage::new(&config.data_file, config.sync_git);
        let tasks = storage
            .load_all()
            .with_context(|| format!("Failed to load tasks from {}", config.data_file.display()))?;
        tracing::info!(
            "loaded {} task(s) from {}",
            tasks.len(),
            storage.file_path().display()
        );

        Ok(Self {
            tasks: TaskList::from_tasks(tasks),
            storage,
            ui: TextUi::new(out),
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Run one command. Returns `false` once the user has said bye.
    pub fn execute(&mut self, command: Command) -> bool {
        tracing::debug!("executing {:?}", command);
        match command {
            Command::Add(task) => self.tasks.add(task, &mut self.ui, &mut self.storage),
            Command::List => self.tasks.list_all(&mut self.ui),
            Command::Done(n) => self.tasks.mark_done(n, &mut self.ui, &mut self.storage),
            Command::Delete(n) => self.tasks.delete(n, &mut self.ui, &mut self.storage),
            Command::Find(keyword) => self.tasks.find_by_keyword(&keyword, &mut self.ui),
            Command::Date(date) => self.tasks.find_by_date(date, &mut self.ui),
            Command::Help => {
                for line in commands::HELP_LINES {
                    self.ui.write_line(line);
                }
            }
            Command::Bye => {
                self.ui.write_line(FAREWELL);
                return false;
            }
        }
        true
    }

    /// Parse and run one input line, reporting parse errors to the user
    pub fn handle_line(&mut self, line: &str) -> bool {
        match Command::parse(line) {
            Ok(Some(command)) => {
                self.ui.divider();
                let keep_going = self.execute(command);
                self.ui.divider();
                keep_going
            }
            Ok(None) => true,
            Err(e) => {
                self.ui.divider();
                self.ui.write_error(&e.to_string());
                self.ui.divider();
                true
            }
        }
    }

    /// Tell the user which stored lines were dropped on load
    fn report_skipped_records(&mut self) {
        let Some(backup) = self.storage.backup_path() else {
            return;
        };
        self.ui.divider();
        for record in self.storage.skipped_records() {
            self.ui.write_error(&record.to_string());
        }
        let notice = formatting::skipped_lines_notice(self.storage.skipped_records().len(), backup);
        self.ui.write_line(&notice);
        self.ui.divider();
    }

    /// Read commands until `bye` or end of input
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.ui.divider();
        self.ui.write_line(GREETING);
        self.ui.divider();
        self.report_skipped_records();

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            if !self.handle_line(&line) {
                break;
            }
        }
        Ok(())
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        // Push to git on shutdown if sync is enabled
        if let Err(e) = self.storage.shutdown() {
            tracing::warn!("git push on shutdown failed: {:#}", e);
        }
    }
}
