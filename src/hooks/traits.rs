//! hooks::traits
//!
//! Post-creation hook trait definition.
//!
//! # Design
//!
//! A hook receives the path of the freshly written post and performs one
//! external action on it. Hooks are synchronous; the editor hook blocks
//! until the editor exits.
//!
//! A hook distinguishes two kinds of failure:
//! - `Err(HookError)`: the action could not be performed at all (the
//!   editor binary could not be launched, the post is not in a repository)
//! - `Ok(HookOutcome)` with `success == false`: the action ran but reported
//!   failure (the editor exited non-zero). The post still exists, so this
//!   is surfaced as a warning rather than an error
//!
//! # Example
//!
//! ```ignore
//! use newpost::hooks::{HookError, PostHook};
//! use std::path::Path;
//!
//! fn after_create(hook: &dyn PostHook, path: &Path) -> Result<(), HookError> {
//!     let outcome = hook.run(path)?;
//!     if !outcome.success {
//!         eprintln!("{} reported failure", hook.name());
//!     }
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::GitError;

/// Errors from post-creation hooks.
#[derive(Debug, Error)]
pub enum HookError {
    /// The external program could not be started.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        /// Program that failed to start
        program: String,
        source: std::io::Error,
    },

    /// Git staging failed.
    #[error("failed to stage '{path}': {source}")]
    Git {
        /// The post being staged
        path: PathBuf,
        source: GitError,
    },
}

/// Result of a hook that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// Whether the action reported success.
    pub success: bool,
    /// Human-readable detail when unsuccessful.
    pub detail: Option<String>,
}

impl HookOutcome {
    /// A successful outcome.
    pub fn ok() -> Self {
        Self {
            success: true,
            detail: None,
        }
    }

    /// An unsuccessful outcome with detail.
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: Some(detail.into()),
        }
    }
}

/// An action run on a post after it has been written.
pub trait PostHook {
    /// Short name used in output (e.g., "editor").
    fn name(&self) -> &str;

    /// Run the hook on the post at `path`.
    fn run(&self, path: &Path) -> Result<HookOutcome, HookError>;
}
