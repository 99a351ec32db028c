//! REST authentication client for the staffgate portal API.
//!
//! This crate is the boundary between the access-control core and the
//! portal's HTTP API:
//!
//! - [`AuthBackend`] is the trait hosts program against; [`AuthClient`] is
//!   the `reqwest` implementation.
//! - A successful login persists the returned token and user through the
//!   shared [`SessionResolver`](staffgate_access::SessionResolver).
//! - Any 401 response clears the local session before
//!   [`ApiError::Unauthorized`] reaches the caller; hosts react by
//!   navigating to the login view. This is the only API error the
//!   access-control core cares about.

pub mod backend;
pub mod client;
pub mod error;

// Re-export main types at crate root
pub use backend::{AuthBackend, Credentials, LoginResponse, ResetPasswordRequest};
pub use client::AuthClient;
pub use error::ApiError;
