//! CLI module
//!
//! Command-line front end for Space operations.
//!
//! # Commands
//!
//! - `list` - List spaces (author/search filters, limit)
//! - `info` - Get space information
//! - `restart` - Restart a space
//! - `pause` - Pause a space
//! - `runtime` - Get space runtime information
//! - `user` - List spaces for a user

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
