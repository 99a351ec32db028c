//! Session state resolution.
//!
//! The [`SessionResolver`] answers "is there a current identity, and what is
//! it?" purely by reading the injected [`SessionStore`] — no network call,
//! no caching. It is invoked on every navigation so that external changes to
//! the store (a logout in another tab) take effect promptly.

use std::sync::Arc;

use crate::identity::Identity;
use crate::role::Role;
use crate::store::SessionStore;

/// The resolved authentication state for a navigation.
///
/// A present token makes the user authenticated even when the identity
/// record is missing or unreadable; in that case the role is unknown, which
/// satisfies no role requirement but still passes role-agnostic gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No session token present.
    Anonymous,
    /// A session token is present. The identity may still be absent if the
    /// stored record is missing or malformed.
    Authenticated { identity: Option<Identity> },
}

impl AuthState {
    /// Returns true if a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns the current role, if authenticated with a recognized role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity } => identity.as_ref().and_then(Identity::role),
        }
    }

    /// Returns the current identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity } => identity.as_ref(),
        }
    }
}

/// Derives authentication state from the persisted session store.
///
/// Stateless: every query re-reads the store. Cloning the resolver clones
/// the store handle, so a resolver can be shared with collaborators (the
/// API client clears the session through its own clone on an unauthorized
/// response).
#[derive(Clone)]
pub struct SessionResolver {
    store: Arc<dyn SessionStore>,
}

impl SessionResolver {
    /// Creates a resolver backed by the given store.
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the stored session token, if present and non-empty.
    ///
    /// Collaborators that call the API read the token through this accessor
    /// on every request rather than caching it.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.token().filter(|t| !t.is_empty())
    }

    /// Returns true iff a non-empty session token is present.
    ///
    /// Presence alone is what the client trusts for local gating; the server
    /// re-validates the token on every request.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Returns the persisted identity, or `None` if absent or malformed.
    ///
    /// A record that fails to parse degrades to `None` rather than an error:
    /// the user stays authenticated with an unknown role, and role-gated
    /// views deny access until the record is rewritten at the next login.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        let record = self.store.identity_record()?;
        match Identity::from_json(&record) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unreadable identity record");
                None
            }
        }
    }

    /// Resolves the full authentication state for a navigation.
    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated {
                identity: self.current_identity(),
            }
        } else {
            AuthState::Anonymous
        }
    }

    /// Persists a fresh token and identity after a successful login.
    pub fn establish(&self, token: &str, identity: &Identity) {
        self.store.set_token(Some(token));
        self.store.set_identity_record(Some(&identity.to_json()));
        tracing::debug!(username = identity.username(), "session established");
    }

    /// Overwrites the persisted identity; `None` clears it.
    ///
    /// Used when the profile changes without re-authentication (e.g., a
    /// profile update response carries the updated user).
    pub fn set_identity(&self, identity: Option<&Identity>) {
        match identity {
            Some(identity) => self
                .store
                .set_identity_record(Some(&identity.to_json())),
            None => self.store.set_identity_record(None),
        }
    }

    /// Removes both the token and the identity.
    ///
    /// Called on logout and when the API reports the session is no longer
    /// valid.
    pub fn clear(&self) {
        self.store.clear();
        tracing::debug!("session cleared");
    }
}

impl std::fmt::Debug for SessionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResolver")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
