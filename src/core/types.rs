//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Title`] - Display title assembled from words
//! - [`Slug`] - Filename-safe form of a title
//!
//! # Validation
//!
//! These types enforce validity at construction time. A `Slug` holding a
//! character outside `[a-z0-9-]` cannot be represented.
//!
//! # Examples
//!
//! ```
//! use newpost::core::types::{Slug, Title};
//!
//! let title = Title::from_words(&["Hello,", "World!"]).unwrap();
//! assert_eq!(title.as_str(), "Hello, World!");
//! assert_eq!(Slug::from_title(&title).as_str(), "hello-world");
//!
//! assert!(Title::from_words::<&str>(&[]).is_err());
//! assert!(Slug::new("Not A Slug").is_err());
//! ```

use std::fmt;

use thiserror::Error;

use super::naming;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("no title words supplied")]
    EmptyTitle,

    #[error("invalid slug: {0}")]
    InvalidSlug(String),
}

/// A post title.
///
/// Kept verbatim: the title is written unescaped into the front matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Join words with single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::EmptyTitle`] if `words` is empty.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, TypeError> {
        if words.is_empty() {
            return Err(TypeError::EmptyTitle);
        }

        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self(joined))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated slug.
///
/// Contains only lowercase ASCII letters, digits and hyphens. The empty
/// slug is representable: a title made only of punctuation slugifies to
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Create a slug from an already-normalized string.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidSlug`] if any character falls outside
    /// `[a-z0-9-]`.
    pub fn new(s: impl Into<String>) -> Result<Self, TypeError> {
        let s = s.into();
        if s.chars().all(is_slug_char) {
            Ok(Self(s))
        } else {
            Err(TypeError::InvalidSlug(s))
        }
    }

    /// Derive the slug for a title.
    pub fn from_title(title: &Title) -> Self {
        // slugify only emits slug characters
        Self(naming::slugify(title.as_str()))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the slug is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}
