//! hooks::editor
//!
//! Open the new post in an editor.
//!
//! # Editor resolution
//!
//! First match wins:
//! 1. Explicit command (`--editor` flag or `editor` config key)
//! 2. `$VISUAL`
//! 3. `$EDITOR`
//! 4. `vi`
//!
//! The command line is split on whitespace, so `code --wait` works. The
//! editor is invoked as `<program> [args...] +<line> <path>`.

use std::path::Path;
use std::process::Command;

use super::traits::{HookError, HookOutcome, PostHook};

/// Fallback when nothing is configured.
pub const DEFAULT_EDITOR: &str = "vi";

/// A parsed editor command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Split a command line into program and arguments.
    ///
    /// Returns `None` for a blank command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Resolve the editor from an explicit choice and the environment.
    ///
    /// Blank values are skipped.
    pub fn resolve(explicit: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Self {
        explicit
            .and_then(Self::parse)
            .or_else(|| env("VISUAL").as_deref().and_then(Self::parse))
            .or_else(|| env("EDITOR").as_deref().and_then(Self::parse))
            .unwrap_or_else(|| Self {
                program: DEFAULT_EDITOR.to_string(),
                args: Vec::new(),
            })
    }

    /// Resolve using the process environment.
    pub fn from_env(explicit: Option<&str>) -> Self {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Hook that opens the post in an editor and waits for it to exit.
#[derive(Debug, Clone)]
pub struct EditorHook {
    command: EditorCommand,
    line: usize,
}

impl EditorHook {
    /// Create an editor hook placing the cursor on `line`.
    pub fn new(command: EditorCommand, line: usize) -> Self {
        Self { command, line }
    }

    fn build(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args)
            .arg(format!("+{}", self.line))
            .arg(path);
        cmd
    }
}

impl PostHook for EditorHook {
    fn name(&self) -> &str {
        "editor"
    }

    fn run(&self, path: &Path) -> Result<HookOutcome, HookError> {
        let status = self
            .build(path)
            .status()
            .map_err(|e| HookError::Launch {
                program: self.command.program.clone(),
                source: e,
            })?;

        if status.success() {
            Ok(HookOutcome::ok())
        } else {
            Ok(HookOutcome::failed(format!(
                "'{}' exited with {}",
                self.command.program, status
            )))
        }
    }
}
