//! hooks::git_add
//!
//! Stage the new post in the repository that contains it.

use std::path::Path;

use super::traits::{HookError, HookOutcome, PostHook};
use crate::git::Git;

/// Hook that runs the equivalent of `git add <post>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitAddHook;

impl PostHook for GitAddHook {
    fn name(&self) -> &str {
        "git-add"
    }

    fn run(&self, path: &Path) -> Result<HookOutcome, HookError> {
        let to_hook_error = |source| HookError::Git {
            path: path.to_path_buf(),
            source,
        };

        let git = Git::open(path).map_err(to_hook_error)?;
        git.stage(path).map_err(to_hook_error)?;

        Ok(HookOutcome::ok())
    }
}
