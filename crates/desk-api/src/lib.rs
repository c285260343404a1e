//! # desk-api
//!
//! Typed HTTP client for the Ticketdesk REST API.
//!
//! One generic [`ApiClient::request`] does the JSON plumbing. Endpoint groups
//! live in their own modules as thin `impl ApiClient` blocks:
//! - [`auth`]: login, token refresh, caller contexts and permissions
//! - [`organizations`] / [`projects`]
//! - [`tickets`]: listing, creation, workflow transitions
//! - [`users`]: admin user management
//! - [`comments`] / [`timeline`]
//! - [`analytics`]: dashboard reports per scope
//!
//! There is no retry. Every failure surfaces as an [`ApiError`].

pub mod analytics;
pub mod auth;
pub mod comments;
pub mod organizations;
pub mod projects;
pub mod tickets;
pub mod timeline;
pub mod users;

mod error;
mod http;

pub use error::ApiError;
pub use http::error_message;
pub use reqwest::Method;

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{check_response, decode_body};

/// Per-request options.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Attach the bearer token. Requests fail with
    /// [`ApiError::NotAuthenticated`] if set and no token is held.
    pub auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            auth: true,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn patch(body: Option<Value>) -> Self {
        Self {
            method: Method::PATCH,
            body,
            ..Self::default()
        }
    }

    /// Send without the bearer token.
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.auth = false;
        self
    }
}

/// HTTP client bound to one API base URL and, optionally, one access token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing slash expected).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ticketdesk/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach the access token used for authenticated requests.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Send one JSON request to `path` and decode the response as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotAuthenticated`] if `auth` is set without a token (no
    ///   request is sent).
    /// - [`ApiError::Http`] on transport failure.
    /// - [`ApiError::Api`] on a non-success status.
    /// - [`ApiError::Parse`] if the body does not decode as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.http.request(options.method.clone(), &url);
        if options.auth {
            let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %options.method, path, "api request");
        let resp = check_response(builder.send().await?).await?;
        let bytes = resp.bytes().await?;
        decode_body(&bytes)
    }
}

/// List endpoints answer either with a bare array or with `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

/// Percent-encode one path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
