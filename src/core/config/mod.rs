//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! newpost has two configuration scopes:
//! - **Global**: User-level settings (editor, cursor line)
//! - **Site**: Per-blog settings (posts directory, layout)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Site config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$NEWPOST_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/newpost/config.toml`
//! 3. `~/.newpost/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use newpost::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/blog"))).unwrap();
//!
//! println!("Posts: {}", config.posts_dir());
//! println!("Layout: {}", config.layout());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, SiteConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::paths::{site_config_path, DEFAULT_POSTS_DIR};
use crate::core::template::DEFAULT_LAYOUT;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules. Site config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Site configuration (if the root has one)
    pub site: Option<SiteConfig>,
    global_path: Option<PathBuf>,
    site_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `root` is provided, also loads the site config under it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or
    /// hold invalid values. Missing config files are not an error.
    pub fn load(root: Option<&Path>) -> Result<Config, ConfigError> {
        let global_path = find_global(|key| std::env::var(key).ok(), dirs::home_dir());
        Self::load_from(global_path.as_deref(), root)
    }

    /// Load configuration from an explicit global config path.
    pub fn load_from(
        global_path: Option<&Path>,
        root: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let global = match global_path {
            Some(path) => read_config::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };

        let site_path = root.map(site_config_path).filter(|p| p.is_file());
        let site = match &site_path {
            Some(path) => Some(read_config::<SiteConfig>(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref s) = site {
            s.validate()?;
        }

        Ok(Config {
            global,
            site,
            global_path: global_path.map(Path::to_path_buf),
            site_path,
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Editor command line, if configured.
    pub fn editor(&self) -> Option<&str> {
        self.global.editor.as_deref()
    }

    /// Cursor line override, if configured.
    pub fn cursor_line(&self) -> Option<usize> {
        self.global.cursor_line
    }

    /// Posts directory relative to the site root.
    ///
    /// Defaults to "_posts".
    pub fn posts_dir(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|s| s.posts_dir.as_deref())
            .unwrap_or(DEFAULT_POSTS_DIR)
    }

    /// Layout written into front matter.
    ///
    /// Defaults to "post".
    pub fn layout(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|s| s.layout.as_deref())
            .unwrap_or(DEFAULT_LAYOUT)
    }

    /// Whether new posts are staged in git.
    ///
    /// Site setting wins over global. Defaults to `false`.
    pub fn git_add(&self) -> bool {
        self.site
            .as_ref()
            .and_then(|s| s.git_add)
            .or(self.global.git_add)
            .unwrap_or(false)
    }

    /// Path the global config was loaded from.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path the site config was loaded from.
    pub fn site_config_loaded_from(&self) -> Option<&Path> {
        self.site_path.as_deref()
    }
}

/// Locate the global config file.
fn find_global(env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env("NEWPOST_CONFIG") {
        candidates.push(PathBuf::from(path));
    }
    if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
        candidates.push(PathBuf::from(xdg_home).join("newpost/config.toml"));
    }
    if let Some(home) = home {
        candidates.push(home.join(".newpost/config.toml"));
    }

    candidates.into_iter().find(|p| p.is_file())
}

fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
