//! Command-line surfaces
//!
//! `check`, `watch` and `play` all feed grids into the same validator and
//! print reports; they differ only in where the grid comes from.

pub mod check;
pub mod play;
pub mod watch;

use std::process::ExitCode;

use anyhow::Result;

use crate::config::{Command, Config};

/// Initialize `env_logger`; `RUST_LOG` takes precedence over the configured level
pub fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Parse arguments, set up logging and dispatch to the chosen command
pub async fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;
    init_logging(&config.log_level);

    if let Some(path) = &config.config_path {
        log::info!("Loaded config file: {}", path.display());
    }

    match &config.command {
        Command::Check { path } => check::run(&config, path.as_deref()).await,
        Command::Watch { path } => {
            watch::run(&config, path).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Play => {
            play::run(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
