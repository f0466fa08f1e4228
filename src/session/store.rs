//! Session store operations.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` exclusively owns the persisted session keys. Every mutation
//! writes through [`Storage`] key by key and then emits on [`AuthEvents`].
//! Multi-key writes are not atomic as a group: a reader between two writes
//! sees a partially updated session. Listeners only run after all writes of
//! the call, so they always see the complete update.
//!
//! AVATAR REFRESH
//! ==============
//! After login the avatar is filled in from the public profile. The refresh
//! never fails its caller; any error leaves the stored avatar as it was and
//! success emits a second, later notification. Each refresh records the
//! session generation it started in, and `clear_auth` bumps the generation,
//! so a refresh that completes after a logout is discarded instead of
//! rewriting the cleared avatar. A refresh is also discarded when the stored
//! name no longer matches the user it was started for.
//!
//! TRADE-OFFS
//! ==========
//! `login_account` awaits the refresh before returning unless the login
//! response already carried a usable avatar. `set_auth` detaches it. Callers
//! of `set_auth` must not assume the avatar is current when it returns.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;

use super::events::{AuthEvents, Subscription};
use super::storage::Storage;
use super::{
    AVATAR_KEY, EMAIL_KEY, NAME_KEY, SESSION_KEYS, SessionState, TOKEN_KEY, is_absolute_url, token_preview,
};
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginEnvelope, LoginRequest, RegisterRequest};
use crate::util::task::Spawner;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid login response: no access token")]
    InvalidLoginResponse,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Input to [`SessionStore::set_auth`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthUpdate {
    /// Empty means "leave the stored token alone".
    pub access_token: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthUpdate {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

impl std::fmt::Debug for AuthUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthUpdate")
            .field("access_token", &token_preview(&self.access_token))
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

/// Single source of truth for "is this browser signed in, and as whom".
pub struct SessionStore<S, A> {
    storage: S,
    api: A,
    events: AuthEvents,
    spawner: Box<dyn Spawner>,
    generation: Cell<u64>,
}

impl<S, A> SessionStore<S, A>
where
    S: Storage + 'static,
    A: AuthApi + 'static,
{
    pub fn new(storage: S, api: A, spawner: impl Spawner + 'static) -> Rc<Self> {
        Rc::new(Self { storage, api, events: AuthEvents::new(), spawner: Box::new(spawner), generation: Cell::new(0) })
    }

    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    /// Subscribe to the change notification.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.events.subscribe(listener)
    }

    // =========================================================================
    // reads
    // =========================================================================

    /// `true` iff a non-empty token is stored. No network I/O.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.read(NAME_KEY)
    }

    #[must_use]
    pub fn user_email(&self) -> Option<String> {
        self.read(EMAIL_KEY)
    }

    #[must_use]
    pub fn profile_picture(&self) -> Option<String> {
        self.read(AVATAR_KEY)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        SessionState {
            access_token: self.access_token(),
            name: self.user_name(),
            email: self.user_email(),
            avatar_url: self.profile_picture(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|v| !v.is_empty())
    }

    /// Log the current session without exposing the full token.
    pub fn log_summary(&self) {
        let state = self.snapshot();
        log::info!(
            "session: authenticated={} name={:?} email={:?} token={}",
            state.is_authenticated(),
            state.name,
            state.email,
            state.access_token.as_deref().map_or_else(|| "<none>".to_owned(), token_preview),
        );
    }

    // =========================================================================
    // writes
    // =========================================================================

    /// Store the token plus any name/email, notify, then refresh the avatar
    /// in the background.
    ///
    /// An empty token is skipped (the stored one is kept) but name/email are
    /// still written and the notification still fires.
    pub fn set_auth(self: &Rc<Self>, update: &AuthUpdate) {
        self.write_auth(update);
        self.events.emit();

        let store = Rc::clone(self);
        self.spawner.spawn_detached(Box::pin(async move {
            store.refresh_avatar_from_profile().await;
        }));
    }

    fn write_auth(&self, update: &AuthUpdate) {
        if update.access_token.is_empty() {
            log::warn!("session: no access token provided, keeping stored token");
        } else {
            match self.storage.set(TOKEN_KEY, &update.access_token) {
                Ok(()) => log::debug!("session: saved access token {}", token_preview(&update.access_token)),
                Err(err) => log::warn!("session: failed to save access token: {err}"),
            }
        }
        for (key, value) in [(NAME_KEY, &update.name), (EMAIL_KEY, &update.email)] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                self.write(key, value);
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self.storage.set(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("session: failed to save {key}: {err}");
                false
            }
        }
    }

    /// Remove every session key and notify. Safe when already signed out.
    pub fn clear_auth(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        for key in SESSION_KEYS {
            self.storage.remove(key);
        }
        log::debug!("session: cleared");
        self.events.emit();
    }

    /// Set or clear the avatar URL, then notify.
    ///
    /// Empty or missing clears it. Only `http(s)://` URLs are stored; anything
    /// else leaves the stored value unchanged.
    pub fn set_profile_picture(&self, url: Option<&str>) {
        match url.filter(|u| !u.is_empty()) {
            None => self.storage.remove(AVATAR_KEY),
            Some(url) if is_absolute_url(url) => {
                self.write(AVATAR_KEY, url);
            }
            Some(url) => log::warn!("session: ignoring non-absolute profile picture {url:?}"),
        }
        self.events.emit();
    }

    // =========================================================================
    // network
    // =========================================================================

    /// Log in and persist the session.
    ///
    /// The avatar is taken from the response when it carries a usable URL;
    /// otherwise the profile refresh is awaited before returning. A failed
    /// refresh does not fail the login.
    ///
    /// # Errors
    ///
    /// [`SessionError::InvalidLoginResponse`] when no token is present at any
    /// probed location (nothing is written), or [`SessionError::Api`] for
    /// transport/status errors from the login call.
    pub async fn login_account(&self, request: &LoginRequest) -> Result<Value, SessionError> {
        let response = self.api.login(request).await.map_err(|err| {
            log::error!("session: login failed: {err}");
            SessionError::from(err)
        })?;

        let envelope = LoginEnvelope::from_value(&response).unwrap_or_default();
        let Some((source, token)) = envelope.resolve_access_token() else {
            log::error!("session: login response missing access token");
            return Err(SessionError::InvalidLoginResponse);
        };

        let profile = envelope.profile();
        let update = AuthUpdate {
            access_token: token.to_owned(),
            name: profile.and_then(|p| p.name.clone()),
            email: profile.and_then(|p| p.email.clone()),
        };
        self.write_auth(&update);
        self.events.emit();
        log::info!(
            "session: login succeeded name={:?} token={} ({source:?})",
            update.name,
            token_preview(token)
        );

        if let Some(avatar) = envelope.immediate_avatar() {
            self.write(AVATAR_KEY, avatar);
            self.events.emit();
        } else {
            self.refresh_avatar_from_profile().await;
        }
        Ok(response)
    }

    /// Register an account. Does not touch the session.
    ///
    /// # Errors
    ///
    /// [`SessionError::Api`] for transport/status errors.
    pub async fn register_account(&self, request: &RegisterRequest) -> Result<Value, SessionError> {
        match self.api.register(request).await {
            Ok(response) => {
                log::info!("session: registration succeeded for {:?}", request.name);
                Ok(response)
            }
            Err(err) => {
                log::error!("session: registration failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Refresh the avatar from the stored user's public profile.
    ///
    /// No-op when signed out or no name is stored. Never fails; errors leave
    /// the stored avatar unchanged.
    pub async fn refresh_avatar_from_profile(&self) {
        if !self.is_authenticated() {
            return;
        }
        let Some(name) = self.user_name() else {
            return;
        };
        let generation = self.generation.get();
        let token = self.access_token();

        let profile = match self.api.fetch_profile(&name, token.as_deref()).await {
            Ok(profile) => profile,
            Err(err) => {
                log::debug!("session: avatar refresh for {name} failed: {err}");
                return;
            }
        };
        if self.generation.get() != generation {
            log::debug!("session: discarding avatar refresh for {name} from a cleared session");
            return;
        }
        if self.user_name().as_deref() != Some(name.as_str()) {
            log::debug!("session: discarding avatar refresh for {name}, signed-in user changed");
            return;
        }
        let Some(url) = profile.avatar_url().filter(|url| is_absolute_url(url)) else {
            return;
        };
        if self.write(AVATAR_KEY, url) {
            self.events.emit();
        }
    }
}
