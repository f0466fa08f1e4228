//! Persisted authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar, footer, and protected views all ask "is this browser
//! signed in, and as whom". [`SessionStore`] answers from durable storage and
//! broadcasts a change notification after every mutation so those fragments
//! re-render instead of polling.
//!
//! DESIGN
//! ======
//! - `storage`: key-value persistence seam (`localStorage` in the browser).
//! - `events`: the synchronous "auth changed" channel.
//! - `token`: ordered probing of the three login-response token locations.
//! - `store`: the operations, including login and avatar refresh.

pub mod events;
pub mod storage;
pub mod store;
pub mod token;

pub use events::{AUTH_CHANGED_EVENT, AuthEvents, Subscription};
pub use storage::{BrowserStorage, MemoryStorage, Storage, StorageError};
pub use store::{AuthUpdate, SessionError, SessionStore};
pub use token::TokenSource;

pub const TOKEN_KEY: &str = "accessToken";
pub const NAME_KEY: &str = "currentUserName";
pub const EMAIL_KEY: &str = "currentUserEmail";
pub const AVATAR_KEY: &str = "profilePicture";

/// Every key the session owns, in clear order.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, NAME_KEY, EMAIL_KEY, AVATAR_KEY];

/// Point-in-time copy of the persisted session fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl SessionState {
    /// The token is the authority field; the others are informational.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// `true` for `http://` and `https://` URLs (case-insensitive scheme).
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && url.len() > scheme.len()
    })
}

/// First 12 characters of a token followed by `...`, for logs.
#[must_use]
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(12).collect();
    format!("{head}...")
}
