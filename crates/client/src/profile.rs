//! Profile endpoints

use crate::error::ClientError;
use crate::form::ProfileUpdate;
use crate::typed::{AuthenticatedClient, read_empty, read_json};
use crate::types::Profile;
use reqwest::Method;

const PROFILE_PATH: &str = "/profile/me";

impl AuthenticatedClient {
    /// Current user's profile. `GET /profile/me`
    pub async fn fetch_profile(&self) -> Result<Profile, ClientError> {
        let response = self.request(Method::GET, PROFILE_PATH).send().await?;
        read_json(response).await
    }

    /// Replace the current user's profile. `PUT /profile/me`
    ///
    /// The success body is not read; callers re-fetch the profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ClientError> {
        tracing::debug!(
            password_changed = update.password.is_some(),
            roles = ?update.roles,
            "updating profile"
        );
        let response = self
            .request(Method::PUT, PROFILE_PATH)
            .json(update)
            .send()
            .await?;
        read_empty(response).await
    }
}
