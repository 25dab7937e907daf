//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$NEWPOST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/newpost/config.toml`
//! 3. `~/.newpost/config.toml`
//!
//! # Site Config
//!
//! Located at `<root>/.newpost.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `posts_dir` must stay
//! inside the site root).

use std::path::{Component, Path};

use serde::Deserialize;

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// editor = "nvim"
/// cursor_line = 6
/// git_add = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Editor command line (program plus arguments)
    pub editor: Option<String>,

    /// Line to place the cursor on
    pub cursor_line: Option<usize>,

    /// Stage new posts in git
    pub git_add: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(editor) = &self.editor {
            if editor.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "editor cannot be empty".to_string(),
                ));
            }
        }

        if self.cursor_line == Some(0) {
            return Err(ConfigError::InvalidValue(
                "cursor_line starts at 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Site configuration (per blog root).
///
/// # Example
///
/// ```toml
/// posts_dir = "_posts"
/// layout = "post"
/// git_add = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Posts directory relative to the root (default: "_posts")
    pub posts_dir: Option<String>,

    /// Layout written into front matter (default: "post")
    pub layout: Option<String>,

    /// Stage new posts in git
    pub git_add: Option<bool>,
}

impl SiteConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.posts_dir {
            validate_posts_dir(dir)?;
        }

        if let Some(layout) = &self.layout {
            if layout.trim().is_empty() || layout.contains('\n') {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid layout '{}': must be a non-empty single line",
                    layout.escape_debug()
                )));
            }
        }

        Ok(())
    }
}

/// `posts_dir` must be a non-empty relative path that stays under the root.
fn validate_posts_dir(dir: &str) -> Result<(), ConfigError> {
    let path = Path::new(dir);

    if dir.is_empty() {
        return Err(ConfigError::InvalidValue(
            "posts_dir cannot be empty".to_string(),
        ));
    }

    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::InvalidValue(format!(
            "invalid posts_dir '{}': must be relative to the site root",
            dir
        )));
    }

    Ok(())
}
