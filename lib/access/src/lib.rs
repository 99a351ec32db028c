//! Session state and role-based view access control for the staffgate portal.
//!
//! This crate is the portal's navigation gate. Two pieces cooperate:
//!
//! - [`SessionResolver`] derives the current authentication state from a
//!   persisted [`SessionStore`] — a stateless read, performed on every
//!   navigation.
//! - [`evaluate`] (with the [`ViewRegistry`]) turns a requested view and the
//!   resolved state into a [`RouteDecision`]: render the view, go to login,
//!   or go somewhere more appropriate.
//!
//! The evaluator is total: denial is a decision, never an error. The only
//! failure this crate absorbs is an unreadable persisted identity record,
//! which degrades to "authenticated, role unknown."
//!
//! # Example
//!
//! ```
//! use staffgate_access::{
//!     Identity, MemoryStore, Role, RouteDecision, SessionResolver, ViewRegistry,
//! };
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let session = SessionResolver::new(store);
//! let registry = ViewRegistry::portal();
//!
//! // Anonymous visitors are sent to the login form.
//! assert_eq!(
//!     registry.resolve("/hr/dashboard", &session.auth_state()),
//!     RouteDecision::RedirectToLogin
//! );
//!
//! // After login, role-gated views open up.
//! session.establish("tok_abc", &Identity::with_role("alice", Role::HrManager));
//! assert_eq!(
//!     registry.resolve("/hr/dashboard", &session.auth_state()),
//!     RouteDecision::Allow
//! );
//! ```

pub mod error;
pub mod identity;
pub mod policy;
pub mod role;
pub mod routes;
pub mod session;
pub mod store;

// Re-export main types at crate root
pub use error::IdentityError;
pub use identity::Identity;
pub use policy::{AccessPolicy, RouteDecision, default_landing_path, evaluate};
pub use role::{FALLBACK_HOME, Role, role_home};
pub use routes::{HOME_PATH, LOGIN_PATH, ViewDescriptor, ViewRegistry};
pub use session::{AuthState, SessionResolver};
pub use store::{MemoryStore, SessionStore};
