//! Screen flows: serialize, send, await, then report what the view should do.
//!
//! Each flow runs strictly in sequence and never retries. The returned
//! outcome is applied by the view layer.

use crate::error::ClientError;
use crate::form::{ProfileSubmission, serialize_profile_update};
use crate::session::TokenStore;
use crate::typed::PublicClient;
use crate::types::{Credentials, Profile};

/// Banner shown after a successful profile update
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";

/// Banner shown when a failed update carries no server message
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";

/// Screens a flow can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Signup,
    Login,
    Profile,
}

/// Result of a signup or login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(Destination),
    /// Server rejected the submission; show its message
    Banner(String),
    /// Transport failure or unreadable error body, logged and otherwise
    /// ignored
    Idle,
}

/// Result of loading the profile screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLoad {
    Ready(Profile),
    Redirect(Destination),
}

/// Result of a profile update submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Update accepted and the profile re-fetched
    Updated { profile: Profile, message: String },
    Failed(String),
    Redirect(Destination),
}

fn rejection(error: ClientError, action: &str) -> SubmitOutcome {
    if error.is_transport() {
        tracing::error!(%error, "{action} request failed");
        return SubmitOutcome::Idle;
    }
    match error.server_message() {
        Some(message) if !message.trim().is_empty() => {
            tracing::warn!(%error, "{action} rejected");
            SubmitOutcome::Banner(message.to_string())
        }
        Some(_) => {
            tracing::error!(%error, "{action} failed without a server message");
            SubmitOutcome::Idle
        }
        None => SubmitOutcome::Banner(error.to_string()),
    }
}

/// Submit the signup form
pub async fn submit_signup(client: &PublicClient, credentials: &Credentials) -> SubmitOutcome {
    match client.register(credentials).await {
        Ok(()) => SubmitOutcome::Navigate(Destination::Login),
        Err(error) => rejection(error, "register"),
    }
}

/// Submit the login form, persisting the session on success
pub async fn submit_login(
    client: &PublicClient,
    store: &impl TokenStore,
    credentials: &Credentials,
) -> SubmitOutcome {
    match client.login(credentials).await {
        Ok(session) => {
            store.save(&session);
            SubmitOutcome::Navigate(Destination::Profile)
        }
        Err(error) => rejection(error, "login"),
    }
}

/// Load the profile for the stored session.
///
/// Without a stored token no request is made. Any failure sends the user to
/// the login screen; a rejected token is also forgotten.
pub async fn load_profile(client: &PublicClient, store: &impl TokenStore) -> ProfileLoad {
    let Some(session) = store.load() else {
        tracing::debug!("no stored session");
        return ProfileLoad::Redirect(Destination::Login);
    };

    match client.authenticate(session).fetch_profile().await {
        Ok(profile) => ProfileLoad::Ready(profile),
        Err(error) => {
            if error.is_auth_expired() {
                store.clear();
            }
            tracing::error!(%error, "error fetching profile");
            ProfileLoad::Redirect(Destination::Login)
        }
    }
}

/// Submit the profile form and refresh the displayed profile
pub async fn submit_profile_update(
    client: &PublicClient,
    store: &impl TokenStore,
    submission: ProfileSubmission<'_>,
) -> UpdateOutcome {
    let Some(session) = store.load() else {
        return UpdateOutcome::Redirect(Destination::Login);
    };

    let update = serialize_profile_update(submission);

    if let Err(error) = client.authenticate(session).update_profile(&update).await {
        tracing::error!(%error, "error updating profile");
        let message = match error.server_message() {
            Some(message) if !message.trim().is_empty() => message.to_string(),
            Some(_) => PROFILE_UPDATE_FAILED.to_string(),
            None => error.to_string(),
        };
        return UpdateOutcome::Failed(message);
    }

    match load_profile(client, store).await {
        ProfileLoad::Ready(profile) => UpdateOutcome::Updated {
            profile,
            message: PROFILE_UPDATED.to_string(),
        },
        ProfileLoad::Redirect(destination) => UpdateOutcome::Redirect(destination),
    }
}

/// End the session
pub fn logout(store: &impl TokenStore) {
    store.clear();
}
