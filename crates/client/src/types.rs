//! Request and settings types for the Messenger settings endpoints

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Which settings endpoint a client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsEndpoint {
    /// `/me/messenger_profile`
    #[default]
    Profile,
    /// `/me/thread_settings`, deprecated by the platform on 2017-03-02
    Thread,
}

impl SettingsEndpoint {
    /// Path below the versioned Graph API root
    pub fn path(self) -> &'static str {
        match self {
            Self::Profile => "/me/messenger_profile",
            Self::Thread => "/me/thread_settings",
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(self, Self::Thread)
    }
}

impl fmt::Display for SettingsEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => f.write_str("profile"),
            Self::Thread => f.write_str("thread"),
        }
    }
}

/// Messenger Profile properties
///
/// Every field is optional and omitted from the request when unset, so a
/// value only carries the properties that should change. Keys the platform
/// adds later can go through `extra`; an `extra` entry named like a typed
/// field is dropped when that field is set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileSettings {
    pub persistent_menu: Option<Value>,
    pub get_started: Option<GetStarted>,
    pub greeting: Option<Vec<Greeting>>,
    pub whitelisted_domains: Option<Vec<String>>,
    pub account_linking_url: Option<String>,
    pub payment_settings: Option<Value>,
    pub target_audience: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Serialize for ProfileSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        let mut written: Vec<&str> = Vec::with_capacity(ProfileField::ALL.len());

        macro_rules! typed_entry {
            ($field:ident, $name:expr) => {
                if let Some(value) = &self.$field {
                    map.serialize_entry($name.as_str(), value)?;
                    written.push($name.as_str());
                }
            };
        }

        typed_entry!(persistent_menu, ProfileField::PersistentMenu);
        typed_entry!(get_started, ProfileField::GetStarted);
        typed_entry!(greeting, ProfileField::Greeting);
        typed_entry!(whitelisted_domains, ProfileField::WhitelistedDomains);
        typed_entry!(account_linking_url, ProfileField::AccountLinkingUrl);
        typed_entry!(payment_settings, ProfileField::PaymentSettings);
        typed_entry!(target_audience, ProfileField::TargetAudience);

        for (key, value) in &self.extra {
            if !written.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }

        map.end()
    }
}

/// Payload sent back to the bot when the Get Started button is tapped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetStarted {
    pub payload: String,
}

/// Localized greeting text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub locale: String,
    pub text: String,
}

impl Greeting {
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }
}

/// Known Messenger Profile property names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    PersistentMenu,
    GetStarted,
    Greeting,
    WhitelistedDomains,
    AccountLinkingUrl,
    PaymentSettings,
    TargetAudience,
}

impl ProfileField {
    pub const ALL: [Self; 7] = [
        Self::PersistentMenu,
        Self::GetStarted,
        Self::Greeting,
        Self::WhitelistedDomains,
        Self::AccountLinkingUrl,
        Self::PaymentSettings,
        Self::TargetAudience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PersistentMenu => "persistent_menu",
            Self::GetStarted => "get_started",
            Self::Greeting => "greeting",
            Self::WhitelistedDomains => "whitelisted_domains",
            Self::AccountLinkingUrl => "account_linking_url",
            Self::PaymentSettings => "payment_settings",
            Self::TargetAudience => "target_audience",
        }
    }
}

impl AsRef<str> for ProfileField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown profile field: {s}"))
    }
}

/// Body of an unset (DELETE) request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsetRequest {
    pub fields: Vec<String>,
}

impl UnsetRequest {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|field| field.as_ref().to_owned())
                .collect(),
        }
    }
}
