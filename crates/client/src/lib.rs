//! Client for the Messenger Platform settings endpoints
//!
//! Sets and unsets a bot's Messenger Profile properties (persistent menu,
//! Get Started button, greeting, ...) through the Graph API, and the older
//! thread settings endpoint the profile replaced.

pub mod client;
pub mod config;
pub mod types;

pub use crate::client::error::{ClientError, GraphApiError};
pub use crate::client::{SettingsClient, SettingsClientBuilder};
pub use crate::config::ClientConfig;
pub use crate::types::{
    GetStarted, Greeting, ProfileField, ProfileSettings, SettingsEndpoint, UnsetRequest,
};
