//! messenger-profile - manage a bot's Messenger Profile settings

mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use commands::Commands;
use logging::LogFormat;
use messenger_profile::{ClientConfig, SettingsClient, SettingsEndpoint};
use std::path::PathBuf;
use tracing::{Level, error};

#[derive(Parser)]
#[command(name = "messenger-profile")]
#[command(about = "Set and unset Messenger Profile settings")]
#[command(version)]
struct Cli {
    /// Page access token
    #[arg(long, global = true, env = "ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Use the deprecated thread settings endpoint
    #[arg(long, global = true)]
    thread: bool,

    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Log output format
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into(), cli.log_format)?;

    let access_token = cli
        .access_token
        .context("An access token is required: pass --access-token or set ACCESS_TOKEN")?;

    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ClientConfig::from_env().context("Failed to load configuration")?,
    };
    if cli.thread {
        config.endpoint = SettingsEndpoint::Thread;
    }

    let client = SettingsClient::from_config(&config)?;

    if let Err(e) = cli.command.execute(&client, &access_token).await {
        error!("Command failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
