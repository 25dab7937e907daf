//! ui
//!
//! User-facing output.
//!
//! # Design
//!
//! All output goes through [`output`] so `--quiet` and `--debug` are
//! honored in one place.

pub mod output;
