//! core::post
//!
//! Composing and writing a new post.
//!
//! # Semantics
//!
//! - The posts directory must already exist; it is never created
//! - An existing file at the target path is overwritten without
//!   confirmation. [`WrittenPost::replaced`] reports when that happened
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use newpost::core::paths::SitePaths;
//! use newpost::core::post::{write_post, NewPost};
//! use newpost::core::types::Title;
//!
//! let title = Title::from_words(&["My", "First", "Post"]).unwrap();
//! let post = NewPost::new(title, Local::now().naive_local());
//! let written = write_post(&SitePaths::with_defaults("."), &post).unwrap();
//! println!("{}", written.path.display());
//! ```

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

use super::naming::post_filename;
use super::paths::SitePaths;
use super::template::{FrontMatter, DEFAULT_LAYOUT};
use super::types::{Slug, Title};

/// Errors from writing a post.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("posts directory '{path}' does not exist")]
    MissingPostsDir { path: PathBuf },

    #[error("failed to write post '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A post ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: Title,
    slug: Slug,
    layout: String,
    created: NaiveDateTime,
}

impl NewPost {
    /// Compose a post with the default layout.
    pub fn new(title: Title, created: NaiveDateTime) -> Self {
        let slug = Slug::from_title(&title);
        Self {
            title,
            slug,
            layout: DEFAULT_LAYOUT.to_string(),
            created,
        }
    }

    /// Override the layout.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// `YYYY-MM-DD-<slug>.md`
    pub fn filename(&self) -> String {
        post_filename(self.created.date(), &self.slug)
    }

    fn front_matter(&self) -> FrontMatter<'_> {
        FrontMatter {
            title: &self.title,
            layout: &self.layout,
            date: self.created,
        }
    }

    /// Rendered file contents.
    pub fn render(&self) -> String {
        self.front_matter().render()
    }

    /// Line where the body starts.
    pub fn body_line(&self) -> usize {
        self.front_matter().body_line()
    }
}

/// Result of [`write_post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPost {
    /// Where the post was written.
    pub path: PathBuf,
    /// Whether a file already existed at `path`.
    pub replaced: bool,
    /// Line where the body starts.
    pub body_line: usize,
}

/// Write a post into the site's posts directory.
///
/// # Errors
///
/// - [`PostError::MissingPostsDir`] if the posts directory is absent
/// - [`PostError::WriteError`] if the file cannot be written
pub fn write_post(paths: &SitePaths, post: &NewPost) -> Result<WrittenPost, PostError> {
    let dir = paths.posts_dir();
    if !dir.is_dir() {
        return Err(PostError::MissingPostsDir { path: dir });
    }

    let path = paths.post_path(&post.filename());
    let replaced = path.exists();

    fs::write(&path, post.render()).map_err(|e| PostError::WriteError {
        path: path.clone(),
        source: e,
    })?;

    Ok(WrittenPost {
        path,
        replaced,
        body_line: post.body_line(),
    })
}
