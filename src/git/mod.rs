//! git
//!
//! Single interface for Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. No other module imports
//! `git2`. newpost only needs two things from a repository: find the one
//! containing a post, and stage that post.
//!
//! # Example
//!
//! ```ignore
//! use newpost::git::Git;
//! use std::path::Path;
//!
//! let post = Path::new("_posts/2024-01-02-hello.md");
//! let git = Git::open(post)?;
//! git.stage(post)?;
//! ```

mod interface;

pub use interface::{Git, GitError};
