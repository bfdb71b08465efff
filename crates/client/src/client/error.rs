//! Client error types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    ///
    /// Carries no URL: the request URL holds the access token.
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The Graph API reported an error object in the response body
    #[error("Remote configuration error: {0}")]
    RemoteConfiguration(GraphApiError),

    /// Response body could not be inspected for an error object
    #[error("Invalid response (status {status}): {body}")]
    InvalidResponse { status: u16, body: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error.without_url())
    }
}

impl ClientError {
    /// The remote error object, if this error came from the Graph API
    pub fn remote(&self) -> Option<&GraphApiError> {
        match self {
            Self::RemoteConfiguration(error) => Some(error),
            _ => None,
        }
    }
}

/// Error object returned by the Graph API under the `error` key
///
/// The API returns these with HTTP 200 as well as with error statuses, so the
/// body is the only reliable signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphApiError {
    pub message: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_subcode: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fbtrace_id: Option<String>,
}

impl GraphApiError {
    /// Build from the raw value of the `error` key
    ///
    /// Objects missing the expected fields and non-object values are kept
    /// as their JSON text so the caller still sees what the API sent.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(message) => Self::from_message(message),
            Value::Object(_) => match serde_json::from_value::<Self>(value.clone()) {
                Ok(error) => error,
                Err(_) => Self::from_message(value.to_string()),
            },
            other => Self::from_message(other.to_string()),
        }
    }

    fn from_message(message: String) -> Self {
        Self {
            message,
            kind: None,
            code: None,
            error_subcode: None,
            fbtrace_id: None,
        }
    }
}

impl std::fmt::Display for GraphApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for GraphApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_error_object() {
        let error = GraphApiError::from_value(json!({
            "message": "Invalid OAuth access token.",
            "type": "OAuthException",
            "code": 190,
            "fbtrace_id": "Hlssg2aiVlN"
        }));

        assert_eq!(error.message, "Invalid OAuth access token.");
        assert_eq!(error.kind.as_deref(), Some("OAuthException"));
        assert_eq!(error.code, Some(190));
        assert_eq!(error.error_subcode, None);
        assert_eq!(error.fbtrace_id.as_deref(), Some("Hlssg2aiVlN"));
        assert_eq!(error.to_string(), "Invalid OAuth access token.");
    }

    #[test]
    fn test_parse_string_error() {
        let error = GraphApiError::from_value(json!("something broke"));
        assert_eq!(error.message, "something broke");
        assert_eq!(error.code, None);
    }

    #[test]
    fn test_parse_object_without_message() {
        let error = GraphApiError::from_value(json!({ "code": 100 }));
        assert_eq!(error.message, r#"{"code":100}"#);
    }

    #[test]
    fn test_remote_accessor() {
        let err = ClientError::RemoteConfiguration(GraphApiError::from_value(json!("nope")));
        assert_eq!(err.remote().map(|e| e.message.as_str()), Some("nope"));
        assert_eq!(err.to_string(), "Remote configuration error: nope");

        let err = ClientError::Configuration("bad".into());
        assert!(err.remote().is_none());
    }
}
