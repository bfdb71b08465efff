//! Set and unset operations

use super::{ClientError, SettingsClient};
use crate::types::UnsetRequest;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument, warn};

const DEPRECATION_CHANGELOG: &str = "https://developers.facebook.com/docs/messenger-platform/changelog";

impl SettingsClient {
    /// Set the given properties
    ///
    /// `settings` is serialized as-is and becomes the request body; only the
    /// properties present in it are changed.
    #[instrument(name = "settings_set", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn set<S>(&self, settings: &S, access_token: &str) -> Result<(), ClientError>
    where
        S: Serialize + ?Sized,
    {
        self.warn_if_deprecated();

        let body = serde_json::to_vec(settings)?;
        let request = self.request(Method::POST, access_token).body(body);
        let result = self.execute(request).await?;

        debug!(%result, "Settings updated");
        Ok(())
    }

    /// Remove the named properties
    #[instrument(name = "settings_unset", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn unset<I, F>(&self, fields: I, access_token: &str) -> Result<(), ClientError>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        self.warn_if_deprecated();

        let unset = UnsetRequest::new(fields);
        debug!(fields = ?unset.fields, "Unsetting settings");

        let body = serde_json::to_vec(&unset)?;
        let request = self.request(Method::DELETE, access_token).body(body);
        let result = self.execute(request).await?;

        debug!(%result, "Settings removed");
        Ok(())
    }

    /// Delete with a caller-supplied body
    ///
    /// The thread settings endpoint identifies what to remove by a settings
    /// object such as `{"setting_type": "greeting"}` rather than a field list.
    #[instrument(name = "settings_unset_with", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn unset_with<S>(&self, payload: &S, access_token: &str) -> Result<(), ClientError>
    where
        S: Serialize + ?Sized,
    {
        self.warn_if_deprecated();

        let body = serde_json::to_vec(payload)?;
        let request = self.request(Method::DELETE, access_token).body(body);
        let result = self.execute(request).await?;

        debug!(%result, "Settings removed");
        Ok(())
    }

    fn warn_if_deprecated(&self) {
        if self.endpoint.is_deprecated() {
            warn!(
                "The thread settings API is deprecated as of Mar 02 2017, use the Messenger Profile endpoint instead. See {DEPRECATION_CHANGELOG}"
            );
        }
    }
}
