//! Session storage abstraction.
//!
//! The [`SessionStore`] trait is the persisted client state the resolver
//! reads: one token slot and one identity-record slot. Implementations are
//! injected rather than reached through globals so tests can substitute a
//! fake, and every read goes back to the backing store so that a change made
//! elsewhere (another tab, another process) is observed on the next
//! navigation. Concurrent writers are not coordinated; last writer wins.

use std::sync::RwLock;

/// Persisted session state: the credential token and the identity record.
///
/// Both slots hold opaque strings. The resolver, not the store, decides what
/// a present-but-empty token means and how to parse the identity record.
pub trait SessionStore: Send + Sync {
    /// Returns the stored session token, if any.
    fn token(&self) -> Option<String>;

    /// Stores or removes the session token.
    fn set_token(&self, token: Option<&str>);

    /// Returns the stored identity record, if any.
    fn identity_record(&self) -> Option<String>;

    /// Stores or removes the identity record.
    fn set_identity_record(&self, record: Option<&str>);

    /// Removes both the token and the identity record.
    fn clear(&self) {
        self.set_token(None);
        self.set_identity_record(None);
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    token: Option<String>,
    identity: Option<String>,
}

/// In-process session store.
///
/// A single mutable cell guarded by an `RwLock`. This is the store the
/// tests use and a reasonable default for hosts that keep session state
/// for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, MemoryState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    fn set_token(&self, token: Option<&str>) {
        self.write().token = token.map(str::to_string);
    }

    fn identity_record(&self) -> Option<String> {
        self.read().identity.clone()
    }

    fn set_identity_record(&self, record: Option<&str>) {
        self.write().identity = record.map(str::to_string);
    }
}
