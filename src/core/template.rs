//! core::template
//!
//! Front-matter rendering for new posts.
//!
//! # Format
//!
//! ```text
//! ---
//! title: My First Post
//! layout: post
//! date: 2024-01-02 09:30:00
//! ---
//!
//! ```
//!
//! The title is written verbatim. No YAML quoting or escaping is applied.

use chrono::NaiveDateTime;

use super::types::Title;

/// `strftime` format of the filename date prefix.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `strftime` format of the `date:` front-matter field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout used when the site does not configure one.
pub const DEFAULT_LAYOUT: &str = "post";

/// Delimiter line around the front-matter block.
const DELIMITER: &str = "---";

/// Front matter of a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Display title
    pub title: &'a Title,
    /// Jekyll layout name
    pub layout: &'a str,
    /// Creation timestamp (local time)
    pub date: NaiveDateTime,
}

impl<'a> FrontMatter<'a> {
    /// Front matter with the default layout.
    pub fn new(title: &'a Title, date: NaiveDateTime) -> Self {
        Self {
            title,
            layout: DEFAULT_LAYOUT,
            date,
        }
    }

    /// Render the front-matter block followed by an empty body.
    pub fn render(&self) -> String {
        format!(
            "{delim}\ntitle: {title}\nlayout: {layout}\ndate: {date}\n{delim}\n\n",
            delim = DELIMITER,
            title = self.title,
            layout = self.layout,
            date = self.date.format(TIMESTAMP_FORMAT),
        )
    }

    /// 1-based line number of the empty body line in [`render`](Self::render)'s output.
    ///
    /// This is where the editor cursor is placed.
    pub fn body_line(&self) -> usize {
        self.render().lines().count()
    }
}
