// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote sweet-shop API.
//!
//! One [`Client`] is built at startup and cloned into every async task
//! (`reqwest::Client` is internally reference-counted). The session cookie
//! set by login/register is the ambient credential: it lives in the
//! client's cookie store and rides along on every request.
//!
//! Error mapping: a non-success status is decoded into
//! [`ApiError::Status`], preserving the server's `message` field when the
//! body carries one; transport failures become [`ApiError::Transport`].

pub mod models;

use crate::error::ApiError;
use models::{Identity, LoginCredentials, RegisterCredentials, Sweet, SweetPayload};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("Sweetstall/", env!("CARGO_PKG_VERSION"));

/// Error body shape used by the API for all failure responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl Client {
    /// Builds a client against `base_url` (no trailing slash required).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Session probe: resolves the current session from the ambient
    /// cookie. Any failure simply means "no session".
    pub async fn me(&self) -> Result<Identity, ApiError> {
        let response = self.http.get(self.url("/api/auth/me")).send().await?;
        decode(response).await
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Identity, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<Identity, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(credentials)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/api/auth/logout")).send().await?;
        check_status(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    pub async fn list_sweets(&self) -> Result<Vec<Sweet>, ApiError> {
        let response = self.http.get(self.url("/api/sweets")).send().await?;
        decode(response).await
    }

    pub async fn search_sweets(&self, name: &str) -> Result<Vec<Sweet>, ApiError> {
        let response = self
            .http
            .get(self.url("/api/sweets/search"))
            .query(&[("name", name)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_sweet(&self, payload: &SweetPayload) -> Result<Sweet, ApiError> {
        let response = self
            .http
            .post(self.url("/api/sweets"))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_sweet(&self, id: &str, payload: &SweetPayload) -> Result<Sweet, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/api/sweets/{id}")))
            .json(payload)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_sweet(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/sweets/{id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Requests a one-unit stock decrement. The server rejects the
    /// purchase (409) when another buyer got the last unit first.
    pub async fn purchase_sweet(&self, id: &str) -> Result<Sweet, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/api/sweets/{id}/purchase")))
            .send()
            .await?;
        decode(response).await
    }
}

/// Rejects non-success responses, extracting the server's `message` from
/// the error body when present.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    Err(ApiError::Status {
        code: status.as_u16(),
        message,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = Client::new("http://localhost:5000/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.url("/api/sweets"), "http://localhost:5000/api/sweets");
    }

    #[test]
    fn url_joins_path_verbatim() {
        let client = Client::new("http://localhost:5000", Duration::from_secs(10)).unwrap();
        assert_eq!(
            client.url("/api/sweets/abc/purchase"),
            "http://localhost:5000/api/sweets/abc/purchase"
        );
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Out of stock"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Out of stock"));
    }
}
