//! Discoursa CLI library
//!
//! Provides argument parsing, configuration and command execution for the
//! `discoursa` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
