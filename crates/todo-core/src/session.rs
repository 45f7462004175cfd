//! Session Store
//!
//! Holds the bearer token. The token survives page reloads through the
//! injected [`KeyValueStore`] and can also arrive as a `?token=` query
//! parameter at the end of the federated (Google) login redirect.

use std::fmt;
use std::rc::Rc;

use percent_encoding::percent_decode_str;

use crate::storage::KeyValueStore;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";

/// Query parameter carrying the token after a federated login
pub const TOKEN_PARAM: &str = "token";

/// Opaque bearer token. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty or whitespace-only token.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Result of adopting a token from the redirect URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectLogin {
    pub credential: Credential,
    /// The incoming query without the token parameter (no leading `?`).
    /// The caller must replace the current history entry with it.
    pub remaining_query: String,
}

pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn get_credential(&self) -> Option<Credential> {
        self.storage.get(TOKEN_KEY).and_then(Credential::new)
    }

    pub fn set_credential(&self, credential: &Credential) {
        self.storage.set(TOKEN_KEY, credential.as_str());
    }

    pub fn clear_credential(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_credential().is_some()
    }

    /// Persists the token found in `query`, if any.
    pub fn adopt_redirect_token(&self, query: &str) -> Option<RedirectLogin> {
        let credential = token_from_query(query).and_then(Credential::new)?;
        self.set_credential(&credential);
        log::info!("[Session] adopted token from login redirect");
        Some(RedirectLogin {
            credential,
            remaining_query: strip_param(query, TOKEN_PARAM),
        })
    }
}

fn pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Extracts the percent-decoded `token` parameter from a query string.
pub fn token_from_query(query: &str) -> Option<String> {
    pairs(query)
        .find(|(key, _)| decode(key) == TOKEN_PARAM)
        .map(|(_, value)| decode(value))
        .filter(|token| !token.is_empty())
}

/// Removes every occurrence of `name`, keeping the other pairs verbatim.
pub fn strip_param(query: &str, name: &str) -> String {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            !pair.is_empty() && decode(key) != name
        })
        .collect::<Vec<_>>()
        .join("&")
}
