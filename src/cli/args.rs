//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Usage
//!
//! ```text
//! newpost [OPTIONS] <TITLE>...
//! ```
//!
//! Title words are joined with single spaces. Options are only recognized
//! before the first title word; everything from there on is part of the
//! title, including words that start with `-`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// newpost - Create a dated Jekyll post and open it in your editor
#[derive(Parser, Debug)]
#[command(name = "newpost")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Creates _posts/<today>-my-first-post.md and opens it in $EDITOR
    newpost My First Post

    # Punctuation is dropped from the filename, kept in the title
    newpost \"Hello, World!\"

    # Write the post without opening an editor, then stage it
    newpost --no-edit --git-add Release notes for 1.2")]
pub struct Cli {
    /// Words of the post title
    #[arg(
        value_name = "TITLE",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub title: Vec<String>,

    /// Site root containing the posts directory [default: .]
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Editor command (overrides config, $VISUAL and $EDITOR)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Do not open the post in an editor
    #[arg(long, conflicts_with = "editor")]
    pub no_edit: bool,

    /// Stage the new post with git
    #[arg(long)]
    pub git_add: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Supported shells for completion
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
