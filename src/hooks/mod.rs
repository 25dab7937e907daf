//! hooks
//!
//! Actions run on a post after it has been written.
//!
//! # Architecture
//!
//! Hooks implement the [`PostHook`] trait and are run in order by a
//! [`HookChain`]:
//!
//! - [`EditorHook`]: Opens the post in an editor (default)
//! - [`GitAddHook`]: Stages the post in git (opt-in)
//!
//! The chain stops at the first hook that returns an error. Unsuccessful
//! outcomes do not stop it.
//!
//! # Example
//!
//! ```no_run
//! use newpost::hooks::{EditorCommand, EditorHook, GitAddHook, HookChain};
//! use std::path::Path;
//!
//! let mut chain = HookChain::new();
//! chain.push(EditorHook::new(EditorCommand::from_env(None), 6));
//! chain.push(GitAddHook);
//!
//! for report in chain.run(Path::new("_posts/2024-01-02-hello.md")).unwrap() {
//!     println!("{}: {}", report.name, report.outcome.success);
//! }
//! ```

mod editor;
mod git_add;
mod traits;

pub use editor::{EditorCommand, EditorHook, DEFAULT_EDITOR};
pub use git_add::GitAddHook;
pub use traits::{HookError, HookOutcome, PostHook};

use std::path::Path;

/// What a single hook in a chain reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    /// Hook name
    pub name: String,
    /// Outcome of the run
    pub outcome: HookOutcome,
}

/// Ordered list of hooks.
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<Box<dyn PostHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook.
    pub fn push(&mut self, hook: impl PostHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Names of the hooks, in run order.
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Run every hook on `path`.
    ///
    /// # Errors
    ///
    /// Returns the first [`HookError`]; later hooks do not run.
    pub fn run(&self, path: &Path) -> Result<Vec<HookReport>, HookError> {
        self.hooks
            .iter()
            .map(|hook| {
                hook.run(path).map(|outcome| HookReport {
                    name: hook.name().to_string(),
                    outcome,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Records every path it sees and returns a fixed result.
    struct Recorder {
        name: &'static str,
        seen: Rc<RefCell<Vec<(String, PathBuf)>>>,
        fail: bool,
    }

    impl PostHook for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn run(&self, path: &Path) -> Result<HookOutcome, HookError> {
            self.seen
                .borrow_mut()
                .push((self.name.to_string(), path.to_path_buf()));
            if self.fail {
                Err(HookError::Launch {
                    program: self.name.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                })
            } else {
                Ok(HookOutcome::ok())
            }
        }
    }

    fn recorder(
        name: &'static str,
        seen: &Rc<RefCell<Vec<(String, PathBuf)>>>,
        fail: bool,
    ) -> Recorder {
        Recorder {
            name,
            seen: Rc::clone(seen),
            fail,
        }
    }

    #[test]
    fn empty_chain() {
        let chain = HookChain::new();
        assert!(chain.is_empty());
        assert!(chain.run(Path::new("x.md")).unwrap().is_empty());
    }

    #[test]
    fn runs_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HookChain::new();
        chain.push(recorder("first", &seen, false));
        chain.push(recorder("second", &seen, false));

        let reports = chain.run(Path::new("post.md")).unwrap();

        assert_eq!(chain.names(), ["first", "second"]);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].name, "first");
        let names: Vec<_> = seen.borrow().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(names, ["first", "second"]);
        assert!(seen.borrow().iter().all(|(_, p)| p == Path::new("post.md")));
    }

    #[test]
    fn stops_at_first_error() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HookChain::new();
        chain.push(recorder("broken", &seen, true));
        chain.push(recorder("never", &seen, false));

        assert!(chain.run(Path::new("post.md")).is_err());
        assert_eq!(seen.borrow().len(), 1);
    }
}
