use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TaskError;
use crate::git_ops::GitOps;
use crate::tasks::Task;

/// Persistence seam used by the task list
///
/// `write_all` always receives the whole list in display order. An
/// implementation must either land the full write or return an error.
pub trait TaskStore {
    fn write_all(&mut self, tasks: &[Task]) -> Result<()>;

    fn load_all(&mut self) -> Result<Vec<Task>>;
}

/// Plain-text file storage, one rendered task per line
///
/// Lines that cannot be read are dropped on load. When that happens the file
/// is first copied to `<name>.bak`, since the next write replaces it with
/// only the tasks that were understood.
pub struct Storage {
    file_path: PathBuf,
    git: Option<GitOps>,
    skipped: Vec<TaskError>,
    backup_path: Option<PathBuf>,
}

impl Storage {
    /// Create a storage backed by `file_path`
    ///
    /// With `sync_git`, the file is committed after every write when it
    /// lives inside a git repository.
    pub fn new(file_path: impl AsRef<Path>, sync_git: bool) -> Self {
        let file_path = file_path.as_ref().to_path_buf();
        let git = if sync_git {
            let git = GitOps::new(&file_path);
            if !git.is_git_managed() {
                tracing::warn!(
                    "{} is not inside a git repository; git sync disabled",
                    file_path.display()
                );
            }
            Some(git).filter(GitOps::is_git_managed)
        } else {
            None
        };
        Self {
            file_path,
            git,
            skipped: Vec::new(),
            backup_path: None,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Push committed changes on shutdown (git sync only)
    pub fn shutdown(&self) -> Result<()> {
        match &self.git {
            Some(git) => git.push(),
            None => Ok(()),
        }
    }

    /// Lines dropped by the last load, as `MalformedRecord` errors
    pub fn skipped_records(&self) -> &[TaskError] {
        &self.skipped
    }

    /// Copy of the file taken because the last load dropped lines
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.file_path.with_file_name(name)
    }
}

/// Decode a whole data file
///
/// Returns the tasks that could be read, in file order, and one
/// `MalformedRecord` per line that could not. Blank lines are ignored.
pub fn decode_tasks(content: &str) -> (Vec<Task>, Vec<TaskError>) {
    let mut tasks = Vec::new();
    let mut skipped = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Task>() {
            Ok(task) => tasks.push(task),
            Err(reason) => {
                let err = TaskError::MalformedRecord {
                    line: i + 1,
                    text: line.to_string(),
                    reason,
                };
                tracing::warn!("skipping stored task: {}", err);
                skipped.push(err);
            }
        }
    }

    (tasks, skipped)
}

/// Encode tasks as the data file content
pub fn encode_tasks(tasks: &[Task]) -> String {
    tasks.iter().map(|task| format!("{}\n", task)).collect()
}

impl TaskStore for Storage {
    fn write_all(&mut self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Write next to the target and rename so a failed write keeps the old file
        let temp_path = self.temp_path();
        fs::write(&temp_path, encode_tasks(tasks))
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.file_path)
            .with_context(|| format!("Failed to replace {}", self.file_path.display()))?;
        tracing::debug!("saved {} task(s) to {}", tasks.len(), self.file_path.display());

        if let Some(git) = &self.git {
            let message = format!("Update task list ({} task(s))", tasks.len());
            if let Err(e) = git.commit(&self.file_path, &message) {
                tracing::warn!("git commit failed: {:#}", e);
            }
        }

        Ok(())
    }

    fn load_all(&mut self) -> Result<Vec<Task>> {
        if let Some(git) = &self.git
            && let Err(e) = git.pull()
        {
            tracing::warn!("git pull failed, loading local copy: {:#}", e);
        }

        self.skipped.clear();
        self.backup_path = None;

        if !self.file_path.exists() {
            tracing::debug!("{} does not exist yet; starting empty", self.file_path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let (tasks, skipped) = decode_tasks(&content);

        if !skipped.is_empty() {
            let backup_path = self.sibling_path(".bak");
            fs::write(&backup_path, &content)
                .with_context(|| format!("Failed to back up {}", self.file_path.display()))?;
            tracing::warn!(
                "{} unreadable line(s) in {}; original kept at {}",
                skipped.len(),
                self.file_path.display(),
                backup_path.display()
            );
            self.backup_path = Some(backup_path);
        }
        self.skipped = skipped;
        tracing::debug!("loaded {} task(s) from {}", tasks.len(), self.file_path.display());
        Ok(tasks)
    }
}
