//! API client access for components

use crate::config::AppConfig;
use portal_client::{ClientBuilder, ClientError, PublicClient};
use std::cell::RefCell;

thread_local! {
    /// Shared client; built on first use from the build-time configuration
    static PUBLIC_CLIENT: RefCell<Option<PublicClient>> = const { RefCell::new(None) };
}

/// Get the public client instance. Authenticated clients are derived from it
/// per call with the current session.
pub fn public_client() -> Result<PublicClient, ClientError> {
    PUBLIC_CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }

        let client = ClientBuilder::from_config(&AppConfig::client_config()).build_public()?;
        tracing::debug!(base_url = client.base_url(), "API client ready");
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}
