//! core::naming
//!
//! Slug and post filename rules.
//!
//! # Slug rules
//!
//! Applied in this order, so stripped punctuation never leaves a doubled
//! or dangling hyphen between words:
//!
//! 1. Remove every character outside `[A-Za-z0-9 ]`
//! 2. Collapse runs of spaces into one space
//! 3. Replace spaces with hyphens
//! 4. Lowercase

use chrono::NaiveDate;

use super::template::DATE_FORMAT;
use super::types::Slug;

/// Extension of generated post files.
pub const POST_EXTENSION: &str = "md";

/// Generate a slug from a post title.
///
/// # Example
///
/// ```
/// use newpost::core::naming::slugify;
///
/// assert_eq!(slugify("My First Post"), "my-first-post");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("A    B"), "a-b");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_space = false;

    for c in title.chars() {
        if c == ' ' {
            pending_space = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_space {
                slug.push('-');
                pending_space = false;
            }
            slug.push(c.to_ascii_lowercase());
        }
        // Anything else is dropped without ending a run of spaces
    }

    if pending_space {
        slug.push('-');
    }

    slug
}

/// Compose the filename for a post created on `date`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use newpost::core::naming::post_filename;
/// use newpost::core::types::Slug;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let slug = Slug::new("my-first-post").unwrap();
/// assert_eq!(post_filename(date, &slug), "2024-01-02-my-first-post.md");
/// ```
pub fn post_filename(date: NaiveDate, slug: &Slug) -> String {
    format!("{}-{}.{}", date.format(DATE_FORMAT), slug, POST_EXTENSION)
}
