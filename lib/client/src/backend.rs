//! Authentication backend trait and request/response types.
//!
//! Hosts talk to the portal API through [`AuthBackend`] so tests and
//! offline tooling can substitute a fake for the HTTP client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use staffgate_access::Identity;

use crate::error::ApiError;

/// Username and password submitted at login.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Plaintext password, sent over TLS only.
    pub password: String,
}

impl Credentials {
    /// Creates a credentials pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful login response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token; sent back as a bearer credential.
    pub token: String,
    /// The authenticated user.
    pub user: Identity,
}

/// Password reset submission.
#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    /// Account email the reset was requested for.
    pub email: String,
    /// One-time reset token from the email link.
    pub token: String,
    /// New password.
    pub password: String,
    /// New password, repeated.
    pub password_confirmation: String,
}

/// Operations against the portal's authentication endpoints.
///
/// Implementations persist session state on a successful `login` and clear
/// it on `logout`, so callers only deal in identities and errors.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Authenticates and establishes a local session.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the API is
    /// unreachable.
    async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError>;

    /// Ends the server-side session and clears local session state.
    ///
    /// Local state is cleared even when the API call fails; a stale token
    /// must never outlive an attempted logout.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Requests a password-reset email.
    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// Completes a password reset.
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffgate_access::{MemoryStore, Role, SessionResolver};
    use std::sync::Arc;

    struct FakeBackend {
        session: SessionResolver,
    }

    #[async_trait]
    impl AuthBackend for FakeBackend {
        async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
            let identity = Identity::with_role(credentials.username.clone(), Role::Employee);
            self.session.establish("tok_fake", &identity);
            Ok(identity)
        }

        async fn logout(&self) -> Result<(), ApiError> {
            self.session.clear();
            Ok(())
        }

        async fn forgot_password(&self, _email: &str) -> Result<(), ApiError> {
            Ok(())
        }

        async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn fake_backend_round_trip() {
        let session = SessionResolver::new(Arc::new(MemoryStore::new()));
        let backend: Box<dyn AuthBackend> = Box::new(FakeBackend {
            session: session.clone(),
        });

        let identity = backend
            .login(&Credentials::new("alice", "secret"))
            .await
            .expect("login");
        assert_eq!(identity.username(), "alice");
        assert!(session.is_authenticated());

        backend.logout().await.expect("logout");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn credentials_serialize_as_form_fields() {
        let creds = Credentials::new("alice", "secret");
        let json = serde_json::to_value(&creds).expect("serialize");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn login_response_deserializes() {
        let body = r#"{"token": "tok_abc", "user": {"username": "alice", "role": "admin"}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).expect("deserialize");
        assert_eq!(parsed.token, "tok_abc");
        assert_eq!(parsed.user.username(), "alice");
    }
}
