//! Registration and login endpoints

use crate::error::ClientError;
use crate::session::Session;
use crate::typed::{PublicClient, read_empty, read_json};
use crate::types::{Credentials, LoginResponse};
use reqwest::Method;

impl PublicClient {
    /// Create an account. `POST /register`
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ClientError> {
        tracing::debug!(username = %credentials.username, "registering account");
        let response = self
            .request(Method::POST, "/register")
            .json(credentials)
            .send()
            .await?;
        read_empty(response).await
    }

    /// Exchange credentials for a session. `POST /login`
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        tracing::debug!(username = %credentials.username, "logging in");
        let response = self
            .request(Method::POST, "/login")
            .json(credentials)
            .send()
            .await?;
        let LoginResponse { token } = read_json(response).await?;
        Ok(Session::new(token))
    }
}
