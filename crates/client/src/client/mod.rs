//! Messenger settings HTTP client

pub mod error;
pub mod settings;

use crate::config::ClientConfig;
use crate::types::SettingsEndpoint;
use error::{ClientError, GraphApiError};
use reqwest::{Client, ClientBuilder, header};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for one of the Messenger settings endpoints
///
/// Holds no per-call state; the access token is supplied with each call.
#[derive(Clone)]
pub struct SettingsClient {
    client: Client,
    url: Url,
    endpoint: SettingsEndpoint,
}

impl SettingsClient {
    /// Create a client for the Messenger Profile endpoint with default configuration
    pub fn profile() -> Result<Self, ClientError> {
        Self::builder().endpoint(SettingsEndpoint::Profile).build()
    }

    /// Create a client for the deprecated thread settings endpoint
    pub fn thread() -> Result<Self, ClientError> {
        Self::builder().endpoint(SettingsEndpoint::Thread).build()
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::builder().config(config).build()
    }

    /// Create a new client builder
    pub fn builder() -> SettingsClientBuilder {
        SettingsClientBuilder::default()
    }

    /// Full URL requests are sent to, without query parameters
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn endpoint(&self) -> SettingsEndpoint {
        self.endpoint
    }

    /// Create a request builder carrying the access token and JSON content type
    pub fn request(&self, method: reqwest::Method, access_token: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url.clone())
            .query(&[("access_token", access_token)])
            .header(header::CONTENT_TYPE, "application/json")
    }

    /// Execute a request and fail if the body carries an `error` object
    ///
    /// The HTTP status is not consulted for JSON bodies: the Graph API reports
    /// logical errors with 200 as well.
    pub async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(endpoint = %self.endpoint, status = status.as_u16(), "Settings request completed");

        if body.iter().all(u8::is_ascii_whitespace) {
            if status.is_success() {
                return Ok(Value::Null);
            }
            return Err(ClientError::InvalidResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let mut value: Value = match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) if status.is_success() => return Err(ClientError::Serialization(e)),
            Err(_) => {
                return Err(ClientError::InvalidResponse {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
        };

        if let Some(error) = value.as_object_mut().and_then(|object| object.remove("error")) {
            let error = GraphApiError::from_value(error);
            debug!(
                endpoint = %self.endpoint,
                code = ?error.code,
                fbtrace_id = ?error.fbtrace_id,
                "Graph API returned an error: {}",
                error.message
            );
            return Err(ClientError::RemoteConfiguration(error));
        }

        Ok(value)
    }
}

/// Builder for SettingsClient
#[derive(Default)]
pub struct SettingsClientBuilder {
    base_url: Option<String>,
    endpoint: SettingsEndpoint,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SettingsClientBuilder {
    /// Set the versioned Graph API root, e.g. `https://graph.facebook.com/v2.6`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Select the settings endpoint
    pub fn endpoint(mut self, endpoint: SettingsEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Apply every setting from a loaded configuration
    pub fn config(mut self, config: &ClientConfig) -> Self {
        self.base_url = Some(config.base_url());
        self.endpoint = config.endpoint;
        self.timeout = config.timeout_secs.map(Duration::from_secs);
        self.user_agent = Some(config.user_agent.clone());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SettingsClient, ClientError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| ClientConfig::default().base_url());

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/');

        let url = Url::parse(&format!("{base_url}{}", self.endpoint.path()))
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url}: {e}")))?;

        let mut client_builder = ClientBuilder::new();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| ClientConfig::default().user_agent);
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder.build()?;

        Ok(SettingsClient {
            client,
            url,
            endpoint: self.endpoint,
        })
    }
}
