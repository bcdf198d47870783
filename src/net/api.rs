//! Verb-level REST client for the marketplace backend.
//!
//! Works in the browser (reqwest's fetch backend on `wasm32`) and natively,
//! so the session store and integration tests run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, ApiError>`. Non-2xx responses keep the
//! status code and the backend's optional `{ message }` so callers can show
//! server-provided text and fall back to their own wording otherwise.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ErrorBody;
use crate::config::ClientConfig;

/// Errors produced by [`ApiClient`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-provided `message`, if present and non-blank.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// HTTP status for [`ApiError::Status`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// User-facing text: the backend message, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Cloneable REST client bound to one API base URL, optionally carrying a
/// bearer token for authenticated calls.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url, bearer: None }
    }

    /// Client over a caller-built `reqwest::Client` (custom timeouts, proxy
    /// settings).
    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, ..Self::new(base_url) }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copy of this client that sends `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_bearer(&self, token: &str) -> Self {
        Self { bearer: Some(token.to_owned()), ..self.clone() }
    }

    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        execute(self.request(Method::GET, path)).await
    }

    /// `GET path?query`.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get_with<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        execute(self.request(Method::GET, path).query(query)).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        execute(self.request(Method::POST, path).json(body)).await
    }

    /// `POST path` without a body, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] or [`ApiError::Status`].
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        execute_unit(self.request(Method::POST, path)).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        execute(self.request(Method::PUT, path).json(body)).await
    }

    /// `PATCH path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        execute(self.request(Method::PATCH, path).json(body)).await
    }

    /// `PATCH path` without a body (state transitions like `/approve`).
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        execute(self.request(Method::PATCH, path)).await
    }

    /// `DELETE path`, ignoring the response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] or [`ApiError::Status`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        execute_unit(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let body = send(builder).await?;
    decode_body(&body)
}

async fn execute_unit(builder: RequestBuilder) -> Result<(), ApiError> {
    send(builder).await.map(drop)
}

/// Send the request and return the raw success body.
async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: error_message(&body) });
    }
    Ok(body)
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let raw = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the non-blank `message` field of an error body, if any.
fn error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) if !message.trim().is_empty() => Some(message),
        _ => None,
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_owned();
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}
