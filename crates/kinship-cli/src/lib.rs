//! Kinship CLI library.
//!
//! This library provides the core functionality for the Kinship command-line interface,
//! including configuration management, dataset loading, command execution, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use dataset::load_dataset;
pub use error::{CliError, Result};
pub use output::Formatter;
