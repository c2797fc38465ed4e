//! Quiver - command-line host for building API collections
//!
//! Reads collection files, runs one editing operation per invocation, and
//! writes the canonical collection text back out.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{AssertionCommand, Cli, Command};
pub use commands::run;
pub use config::{Config, ConfigError};
