//! cli::commands
//!
//! Command handlers.
//!
//! - [`new_post`] - Write a post and run post-creation hooks
//! - [`completion`] - Print a shell completion script

mod completion;
mod new;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use new::{new_post, new_post_with, NewPostOptions};
