//! API endpoint configuration.
//!
//! WASM builds have no process environment, so overrides are read at compile
//! time with `option_env!`:
//! - `API_BASE_URL`: default `https://v2.api.noroff.dev`
//! - `NOROFF_API_KEY`: sent as `X-Noroff-API-Key` when set

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://v2.api.noroff.dev";

pub const API_KEY_HEADER: &str = "X-Noroff-API-Key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned(), api_key: None }
    }
}

impl ApiConfig {
    /// Build config from compile-time overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(option_env!("API_BASE_URL"), option_env!("NOROFF_API_KEY"))
    }

    /// Build config from optional raw values. Blank values fall back to defaults.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let api_key = api_key.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        Self { base_url, api_key }
    }

    /// Absolute URL for an API path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Headers every request carries, plus the bearer token when given.
    #[must_use]
    pub fn headers(&self, access_token: Option<&str>) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER, key.clone()));
        }
        if let Some(token) = access_token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }
}
