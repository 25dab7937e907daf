//! git::interface
//!
//! Git interface implementation using git2.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::OutsideWorkdir`]: Path is not under the working directory
//! - [`GitError::Internal`]: Any other git2 failure

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Path lies outside the repository's working directory.
    #[error("path is outside the working directory: {path}")]
    OutsideWorkdir {
        /// The offending path
        path: PathBuf,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    fn internal(context: &str, err: git2::Error) -> Self {
        GitError::Internal {
            message: format!("{}: {}", context, err.message()),
        }
    }
}

/// Handle to a non-bare repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open the repository containing `path`.
    ///
    /// `path` may be a file; discovery starts from its directory.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let start = if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        };
        // An empty parent means the current directory
        let start = if start.as_os_str().is_empty() {
            Path::new(".")
        } else {
            start
        };

        let repo = git2::Repository::discover(start).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// The working directory.
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    /// Add a file to the index, like `git add <path>`.
    ///
    /// # Errors
    ///
    /// - [`GitError::OutsideWorkdir`] if `path` is not in this repository
    /// - [`GitError::Internal`] if the index cannot be updated
    pub fn stage(&self, path: &Path) -> Result<(), GitError> {
        let work_dir = canonical(self.work_dir()?)?;
        let file = canonical(path)?;

        let relative = file
            .strip_prefix(&work_dir)
            .map_err(|_| GitError::OutsideWorkdir {
                path: path.to_path_buf(),
            })?;

        let mut index = self
            .repo
            .index()
            .map_err(|e| GitError::internal("failed to read index", e))?;
        index
            .add_path(relative)
            .map_err(|e| GitError::internal("failed to add path", e))?;
        index
            .write()
            .map_err(|e| GitError::internal("failed to write index", e))?;

        Ok(())
    }

    /// Check whether `path` is staged as a new or modified file.
    pub fn is_staged(&self, path: &Path) -> Result<bool, GitError> {
        let work_dir = canonical(self.work_dir()?)?;
        let file = canonical(path)?;
        let Ok(relative) = file.strip_prefix(&work_dir) else {
            return Ok(false);
        };

        let status = self
            .repo
            .status_file(relative)
            .map_err(|e| GitError::internal("failed to read status", e))?;

        Ok(status.is_index_new() || status.is_index_modified())
    }
}

fn canonical(path: &Path) -> Result<PathBuf, GitError> {
    path.canonicalize().map_err(|e| GitError::Internal {
        message: format!("failed to resolve '{}': {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn open_outside_repo_fails() {
        let temp = TempDir::new().unwrap();
        let result = Git::open(temp.path());
        assert!(matches!(result, Err(GitError::NotARepo { .. })));
    }

    #[test]
    fn stage_new_file() {
        let temp = TempDir::new().unwrap();
        git2::Repository::init(temp.path()).unwrap();
        fs::create_dir(temp.path().join("_posts")).unwrap();
        let post = temp.path().join("_posts/2024-01-02-hello.md");
        fs::write(&post, "---\n").unwrap();

        let git = Git::open(&post).unwrap();
        assert!(!git.is_staged(&post).unwrap());

        git.stage(&post).unwrap();
        assert!(git.is_staged(&post).unwrap());
    }

    #[test]
    fn stage_outside_workdir_fails() {
        let repo_dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        git2::Repository::init(repo_dir.path()).unwrap();
        let stray = other.path().join("stray.md");
        fs::write(&stray, "x").unwrap();

        let git = Git::open(repo_dir.path()).unwrap();
        let result = git.stage(&stray);
        assert!(matches!(result, Err(GitError::OutsideWorkdir { .. })));
    }
}
