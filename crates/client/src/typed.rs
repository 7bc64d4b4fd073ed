//! Type-safe API clients that enforce authentication requirements at compile time

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::Session;
use reqwest::{Client, ClientBuilder as HttpClientBuilder, header};
use std::time::Duration;

const USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// Client for endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client bound to a session; every request carries its bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    session: Session,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = HttpClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        HttpClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let base_url = base_url.trim().trim_end_matches('/');
    if base_url.is_empty() {
        return Err(ClientError::Configuration("base_url is required".into()));
    }
    Ok(base_url.to_string())
}

/// Read the body once, then branch on status
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(ClientError::from_response_body(status, &body))
    }
}

/// Like [`read_json`] for endpoints whose success body is ignored
pub(crate) async fn read_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_response_body(status, &body))
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        ClientBuilder::new().base_url(base_url).build_public()
    }

    fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Attach a session to get an authenticated client
    pub fn authenticate(&self, session: Session) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session,
        }
    }
}

impl AuthenticatedClient {
    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url).header(
            header::AUTHORIZATION,
            format!("Bearer {}", self.session.token()),
        )
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: config.timeout,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicClient::with_timeout(&base_url, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let client = PublicClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn requires_base_url() {
        assert!(matches!(
            ClientBuilder::new().build_public(),
            Err(ClientError::Configuration(_))
        ));
        assert!(matches!(
            PublicClient::new("  /"),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn authenticated_request_carries_bearer() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:3000")
            .build_public()
            .unwrap()
            .authenticate(Session::new("tok"));
        let request = client
            .request(reqwest::Method::GET, "/profile/me")
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:3000/profile/me");
        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );
    }

    #[test]
    fn public_request_has_no_auth_header() {
        let config = ClientConfig::new("http://api.test").with_timeout(Duration::from_secs(5));
        let client = ClientBuilder::from_config(&config).build_public().unwrap();
        let request = client
            .request(reqwest::Method::POST, "/login")
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://api.test/login");
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }
}
