//! core::paths
//!
//! Centralized path routing inside a site root.
//!
//! # Storage Layout
//!
//! Relative to the site root:
//! - `_posts/` - Post files (configurable, never created by newpost)
//! - `.newpost.toml` - Site configuration
//!
//! # Example
//!
//! ```
//! use newpost::core::paths::SitePaths;
//! use std::path::PathBuf;
//!
//! let paths = SitePaths::new("/blog", "_posts");
//!
//! assert_eq!(
//!     paths.post_path("2024-01-02-hello.md"),
//!     PathBuf::from("/blog/_posts/2024-01-02-hello.md")
//! );
//! ```

use std::path::{Path, PathBuf};

/// Default posts directory, relative to the site root.
pub const DEFAULT_POSTS_DIR: &str = "_posts";

/// Filename of the site configuration file.
pub const SITE_CONFIG_FILE: &str = ".newpost.toml";

/// Path routing for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    root: PathBuf,
    posts_dir: PathBuf,
}

impl SitePaths {
    /// Create paths for a site root and a posts directory relative to it.
    pub fn new(root: impl Into<PathBuf>, posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            posts_dir: posts_dir.into(),
        }
    }

    /// Paths with the default `_posts` directory.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_POSTS_DIR)
    }

    /// Directory holding posts.
    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.posts_dir)
    }

    /// Full path for a post filename.
    pub fn post_path(&self, filename: &str) -> PathBuf {
        self.posts_dir().join(filename)
    }
}

/// Site configuration file for a root.
///
/// Not a `SitePaths` method: the config is read first, since it may
/// override the posts directory.
pub fn site_config_path(root: &Path) -> PathBuf {
    root.join(SITE_CONFIG_FILE)
}
