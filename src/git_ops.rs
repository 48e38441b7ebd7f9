use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::{Path, PathBuf};

/// Keeps the task file under version control when it lives in a git repository
pub struct GitOps {
    repo: Option<Repository>,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if the path is in a git repository
    ///
    /// The data file itself may not exist yet, so discovery starts from its
    /// directory.
    pub fn new(file_path: &Path) -> Self {
        let file_dir = if file_path.is_dir() {
            file_path.to_path_buf()
        } else {
            match file_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };

        let repo = Repository::discover(&file_dir).ok();
        Self { repo }
    }

    /// Check if the file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Fast-forward the current branch from `origin`
    pub fn pull(&self) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };

        let branch_name = Self::branch_name(repo)?;
        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        remote
            .fetch(&[&branch_name], None, None)
            .context("Failed to fetch from origin")?;

        let fetch_head = repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
        let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            return Ok(());
        }

        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", branch_name);
            let mut reference = repo.find_reference(&refname)?;
            reference.set_target(fetch_commit.id(), "Fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
            tracing::debug!("fast-forwarded {} from origin", branch_name);
            Ok(())
        } else {
            Err(anyhow::anyhow!(
                "Local and remote task files have diverged. Please merge manually."
            ))
        }
    }

    /// Commit the task file
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };

        let repo_workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()?;
        let file_path = file_path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", file_path.display()))?;
        let relative_path = file_path
            .strip_prefix(&repo_workdir)
            .context("Task file is not in repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        // Nothing staged since the last commit
        if let Some(parent) = &parent_commit
            && parent.tree_id() == tree_id
        {
            return Ok(());
        }

        let signature = Self::get_signature(repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();
        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        tracing::debug!("committed {}: {}", relative_path.display(), message);

        Ok(())
    }

    /// Push the current branch to `origin`
    pub fn push(&self) -> Result<()> {
        let Some(repo) = &self.repo else {
            return Ok(());
        };

        let branch_name = Self::branch_name(repo)?;
        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        let refspec = format!("refs/heads/{}", branch_name);
        remote.push(&[&refspec], None)?;

        Ok(())
    }

    fn branch_name(repo: &Repository) -> Result<String> {
        let head = repo.head().context("Failed to get HEAD")?;
        Ok(head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string())
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "taskbook".to_string());
        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "taskbook@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Some CI systems cannot provide the current time
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}
