//! ui::output
//!
//! Everything newpost prints goes through here.
//!
//! | Kind | Stream | Shown when | Example |
//! |---|---|---|---|
//! | success | stdout | not `--quiet` | `Created ./_posts/2024-01-02-hello.md` |
//! | warn | stderr | not `--quiet` | `warning: replaced existing post ...`, `warning: editor: 'vim' exited with ...` |
//! | debug | stderr | `--debug` | `[debug] site config: ./.newpost.toml` |
//! | error | stderr | always | `error: Failed to create post: posts directory '...' does not exist` |

use std::fmt::Display;

/// How much newpost prints, from `--quiet` and `--debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Created path and warnings
    Normal,
    /// Also resolved root, config files, slug and hooks
    Debug,
}

impl Verbosity {
    /// `--quiet` wins over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether the created path and warnings are printed.
    pub fn shows_normal(self) -> bool {
        self != Verbosity::Quiet
    }

    pub fn shows_debug(self) -> bool {
        self == Verbosity::Debug
    }
}

/// Print a `[debug]` line.
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_debug() {
        eprintln!("[debug] {}", message);
    }
}

/// Print the final `error:` line before exiting.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a `warning:` line for a problem that does not fail the run.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_normal() {
        eprintln!("warning: {}", message);
    }
}

/// Print a result line on stdout.
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_normal() {
        println!("{}", message);
    }
}

/// One item per line, each behind `prefix`. Used for the hook list.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}
