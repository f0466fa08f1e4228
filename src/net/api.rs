//! REST calls used by the session store.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: stubs returning [`ApiError::Unavailable`], since these endpoints
//! are only reachable from the browser build.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures are reported as distinct
//! [`ApiError`] variants. Callers decide whether to surface or swallow them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::config::ApiConfig;
use super::types::{LoginRequest, ProfileEnvelope, RegisterRequest};

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Remote operations the session store depends on.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for a login response. The body is returned raw
    /// because the token location varies between API versions.
    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError>;

    /// Fetch the public profile for `name`.
    async fn fetch_profile(&self, name: &str, access_token: Option<&str>) -> Result<ProfileEnvelope, ApiError>;
}

/// Path of the public profile for `name`, percent-encoded.
#[must_use]
pub fn profile_path(name: &str) -> String {
    format!("/auction/profiles/{}", urlencoding::encode(name))
}

/// Build a status error, preferring the first upstream error message.
#[must_use]
pub fn status_error(status: u16, body: Option<&Value>) -> ApiError {
    let message = body
        .and_then(|b| b.get("errors"))
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("request failed: {status}"), str::to_owned);
    ApiError::Status { status, message }
}

/// [`AuthApi`] over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    fn decorate(
        &self,
        mut builder: gloo_net::http::RequestBuilder,
        access_token: Option<&str>,
    ) -> gloo_net::http::RequestBuilder {
        for (name, value) in self.config.headers(access_token) {
            builder = builder.header(name, &value);
        }
        builder
    }

    async fn post_json<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(path);
            let resp = self
                .decorate(gloo_net::http::Request::post(&url), None)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<Value>().await.ok();
        return Err(status_error(status, body.as_ref()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<Value, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    async fn fetch_profile(&self, name: &str, access_token: Option<&str>) -> Result<ProfileEnvelope, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(&profile_path(name));
            let resp = self
                .decorate(gloo_net::http::Request::get(&url), access_token)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, access_token);
            Err(ApiError::Unavailable)
        }
    }
}
