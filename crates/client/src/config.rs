//! Client configuration

use crate::types::SettingsEndpoint;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default Graph API host
pub const DEFAULT_GRAPH_URL: &str = "https://graph.facebook.com";

/// Graph API version the settings endpoints are served under
pub const DEFAULT_API_VERSION: &str = "v2.6";

/// Settings client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Graph API host, without version
    #[serde(default = "default_graph_url")]
    pub graph_url: String,

    /// Versioned path segment, e.g. `v2.6`
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Which settings endpoint to use
    #[serde(default)]
    pub endpoint: SettingsEndpoint,

    /// Request timeout in seconds; transport default when absent
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_graph_url() -> String {
    DEFAULT_GRAPH_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_user_agent() -> String {
    concat!("messenger-profile/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graph_url: default_graph_url(),
            api_version: default_api_version(),
            endpoint: SettingsEndpoint::default(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Versioned Graph API root, e.g. `https://graph.facebook.com/v2.6`
    pub fn base_url(&self) -> String {
        format!(
            "{}/{}",
            self.graph_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }

    /// Load configuration from defaults and `MESSENGER_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder(None)?.build()?.try_deserialize()
    }

    /// Load configuration from a file, with `MESSENGER_*` environment variables
    /// overriding file values
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::builder(Some(path.as_ref()))?.build()?.try_deserialize()
    }

    fn builder(
        path: Option<&Path>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        Ok(builder.add_source(
            Environment::with_prefix("MESSENGER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_base_url() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "https://graph.facebook.com/v2.6");
        assert_eq!(config.endpoint, SettingsEndpoint::Profile);
        assert!(config.user_agent.starts_with("messenger-profile/"));
    }

    #[test]
    fn test_base_url_trims_slashes() {
        let config = ClientConfig {
            graph_url: "http://127.0.0.1:9000/".into(),
            api_version: "/v19.0/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://127.0.0.1:9000/v19.0");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
graph_url = "http://localhost:4000"
endpoint = "thread"
timeout_secs = 5
"#
        )
        .unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.graph_url, "http://localhost:4000");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.endpoint, SettingsEndpoint::Thread);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ClientConfig::from_file("/nonexistent/messenger.toml").is_err());
    }
}
