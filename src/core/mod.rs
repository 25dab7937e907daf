//! core
//!
//! Core domain types and operations for newpost.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Title, Slug
//! - [`naming`] - Slug and filename rules
//! - [`template`] - Front-matter rendering
//! - [`paths`] - Path routing inside a site root
//! - [`post`] - Composing and writing a new post
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing keeps unsanitized text out of filenames
//! - The clock is an input, so every operation is deterministic

pub mod config;
pub mod naming;
pub mod paths;
pub mod post;
pub mod template;
pub mod types;
