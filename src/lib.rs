//! newpost - Create a dated Jekyll post and open it in an editor
//!
//! `newpost My First Post` writes `_posts/2024-01-02-my-first-post.md` with a
//! front-matter header and hands the file to your editor.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs the command)
//! - [`core`] - Domain types, slug rules, template rendering, post writing
//! - [`hooks`] - Post-creation hooks (editor, git staging)
//! - [`git`] - Single interface for Git operations
//! - [`ui`] - Output formatting
//!
//! # Guarantees
//!
//! 1. A missing title aborts before any file is touched
//! 2. Slugs only contain `[a-z0-9-]`
//! 3. Exactly one file is written per invocation

pub mod cli;
pub mod core;
pub mod git;
pub mod hooks;
pub mod ui;
