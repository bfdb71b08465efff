//! CLI commands

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use messenger_profile::SettingsClient;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Subcommand)]
pub enum Commands {
    /// Set profile properties from a JSON object
    Set {
        /// JSON file holding the settings object, or `-` for stdin
        file: PathBuf,
    },

    /// Remove profile properties
    Unset {
        /// Property names, e.g. `greeting get_started`
        #[arg(required = true)]
        fields: Vec<String>,
    },
}

impl Commands {
    pub async fn execute(self, client: &SettingsClient, access_token: &str) -> Result<()> {
        match self {
            Commands::Set { file } => {
                let settings = read_settings(&file).await?;
                client
                    .set(&settings, access_token)
                    .await
                    .context("Failed to set settings")?;
                info!("Settings updated on {}", client.endpoint());
                println!("ok");
                Ok(())
            }
            Commands::Unset { fields } => {
                client
                    .unset(&fields, access_token)
                    .await
                    .context("Failed to unset settings")?;
                info!("Removed {} from {}", fields.join(", "), client.endpoint());
                println!("ok");
                Ok(())
            }
        }
    }
}

/// Read a settings object from a file, or stdin when the path is `-`
async fn read_settings(path: &Path) -> Result<Value> {
    let raw = if path.as_os_str() == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read settings from stdin")?;
        raw
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings from {}", path.display()))?
    };

    parse_settings(&raw)
}

fn parse_settings(raw: &str) -> Result<Value> {
    let settings: Value = serde_json::from_str(raw).context("Settings are not valid JSON")?;
    if !settings.is_object() {
        bail!("Settings must be a JSON object");
    }
    Ok(settings)
}
