//! Configuration management for magic-box.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML config file (project-local or per-user)
//! - Merging both into a validated [`Config`]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::core::session::{check_size, CellBounds, DEFAULT_SIZE};
use crate::report::OutputFormat;

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".magic-box.toml";

/// Command-line arguments for magic-box
#[derive(Debug, Parser)]
#[command(name = "magic-box")]
#[command(about = "Check whether a grid of integers is a magic square")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of the default lookup
    #[arg(long, global = true, help = "Path to a magic-box TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,

    /// Grid size for interactive sessions
    #[arg(long, global = true, help = "Grid size for play (3, 4 or 5)")]
    pub size: Option<usize>,

    /// Smallest accepted cell value
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub min: Option<i64>,

    /// Largest accepted cell value
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub max: Option<i64>,

    /// Report format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check a grid file once (reads stdin when PATH is missing or "-")
    Check { path: Option<PathBuf> },
    /// Re-check a grid file every time it changes
    Watch { path: PathBuf },
    /// Edit a grid cell by cell, re-checking after every change
    Play,
}

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub size: Option<usize>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    /// Grid size for interactive sessions
    pub size: usize,
    /// Accepted cell range
    pub bounds: CellBounds,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                Some(path.clone())
            }
            None => Self::find_config_file(),
        };

        let file = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        let mut config = Self::from_parts(args, file)?;
        config.config_path = config_path;
        Ok(config)
    }

    /// Merge arguments over file values; arguments win
    pub fn from_parts(args: Args, file: FileConfig) -> Result<Self> {
        let defaults = CellBounds::default();
        let size = args.size.or(file.size).unwrap_or(DEFAULT_SIZE);
        let bounds = CellBounds {
            min: args.min.or(file.min_value).unwrap_or(defaults.min),
            max: args.max.or(file.max_value).unwrap_or(defaults.max),
        };

        check_size(size)?;
        if bounds.min > bounds.max {
            bail!(
                "Invalid cell bounds: min {} is greater than max {}",
                bounds.min,
                bounds.max
            );
        }

        Ok(Config {
            command: args.command,
            size,
            bounds,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
            config_path: None,
        })
    }

    /// Config file candidates, most specific first
    pub fn config_file_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(PROJECT_CONFIG_FILE));
        }

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("magic-box").join("config.toml"));
        }

        candidates
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::config_file_candidates()
            .into_iter()
            .find(|path| path.is_file())
    }

    pub fn has_config_file(&self) -> bool {
        self.config_path.is_some()
    }
}
