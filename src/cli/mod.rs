//! cli
//!
//! Command-line interface layer for newpost.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Build the execution [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. File composition lives in [`crate::core`] and
//! external actions in [`crate::hooks`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Execution context shared by command handlers.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Site root override. `None` means the current directory.
    pub root: Option<PathBuf>,
    /// Debug output enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity for these flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The site root, relative to the current directory unless overridden.
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if let Some(shell) = cli.completions {
        return commands::completion(shell);
    }

    let ctx = Context {
        root: cli.root.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    let options = commands::NewPostOptions {
        editor: cli.editor,
        no_edit: cli.no_edit,
        git_add: cli.git_add,
    };

    commands::new_post(&ctx, &cli.title, &options).map(|_| ())
}
