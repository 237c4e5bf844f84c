//! Command-line interface for launchdeck.
//!
//! This module provides the CLI structure and output formatting for the
//! `ldeck` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ListCommand, ShowCommand};

use crate::config::Config;
use crate::error::Result;
use crate::logging::Verbosity;

/// ldeck - Browse past and upcoming SpaceX launches
///
/// Fetches the past and upcoming launch collections, merges them, and lets
/// you search the list or inspect a single launch.
#[derive(Debug, Parser)]
#[command(name = "ldeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the launch API root
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List launches, optionally narrowed by a search query
    List(ListCommand),

    /// Show the details of one launch
    Show(ShowCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Load the configuration the API commands run with.
    ///
    /// `--base-url` wins over the file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load_from(self.config.clone())?;
        match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.as_str()),
            None => Ok(config),
        }
    }

    /// File checked by `config validate`: `--file`, then `--config`, then
    /// the default location.
    #[must_use]
    pub fn validation_target(&self) -> PathBuf {
        let file = match &self.command {
            Command::Config(ConfigCommand::Validate { file }) => file.clone(),
            _ => None,
        };
        file.or_else(|| self.config.clone())
            .unwrap_or_else(Config::default_config_path)
    }
}
