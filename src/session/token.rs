//! Access-token probing for login responses.
//!
//! The login endpoint has placed the token at the top level, inside `meta`,
//! and inside `data`. Probing is an explicit ordered list so the interop
//! contract stays visible and testable.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use serde::Deserialize;
use serde_json::Value;

use crate::net::types::{LoginData, LoginEnvelope};

use super::is_absolute_url;

/// Where in the login envelope a token was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSource {
    TopLevel,
    Meta,
    Data,
}

impl TokenSource {
    /// Probe order. The first present, non-empty value wins.
    pub const PROBE_ORDER: [Self; 3] = [Self::TopLevel, Self::Meta, Self::Data];

    fn probe(self, envelope: &LoginEnvelope) -> Option<&str> {
        match self {
            Self::TopLevel => envelope.access_token.as_deref(),
            Self::Meta => envelope.meta.as_ref().and_then(|m| m.access_token.as_deref()),
            Self::Data => envelope.data.as_ref().and_then(|d| d.access_token.as_deref()),
        }
    }
}

impl LoginEnvelope {
    /// Decode a raw login response. `None` only when the body is not a JSON
    /// object; malformed fields inside an object decode as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    /// The authoritative token and where it was found.
    #[must_use]
    pub fn resolve_access_token(&self) -> Option<(TokenSource, &str)> {
        TokenSource::PROBE_ORDER
            .into_iter()
            .find_map(|source| source.probe(self).filter(|t| !t.is_empty()).map(|t| (source, t)))
    }

    #[must_use]
    pub fn profile(&self) -> Option<&LoginData> {
        self.data.as_ref()
    }

    /// Avatar URL from `data` that can be stored without a profile fetch.
    #[must_use]
    pub fn immediate_avatar(&self) -> Option<&str> {
        self.profile()
            .and_then(|d| d.avatar.as_ref())
            .map(crate::net::types::AvatarRef::url)
            .filter(|url| is_absolute_url(url))
    }
}
