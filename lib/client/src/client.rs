//! HTTP implementation of the authentication backend.
//!
//! [`AuthClient`] wraps a `reqwest::Client` pointed at the portal API. It
//! injects the stored session token as a bearer credential on every request
//! and handles the unauthorized signal in one place: any 401 response clears
//! the local session before the error reaches the caller, no matter which
//! call triggered it.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use staffgate_access::{Identity, SessionResolver};

use crate::backend::{AuthBackend, Credentials, LoginResponse, ResetPasswordRequest};
use crate::error::ApiError;

/// Portal API client for the authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionResolver,
}

impl AuthClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// The session resolver is shared with the host so that a cleared
    /// session is observed by the next navigation.
    #[must_use]
    pub fn new(base_url: impl Into<String>, session: SessionResolver) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            session,
        }
    }

    /// Returns the absolute URL for an API path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a response status, clearing the session on a 401.
    fn check_status(&self, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("API rejected the session token; clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Posts a JSON body, with the bearer token attached when present.
    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.post(self.endpoint(path)).json(body);
        // Re-read the token per request; it can change underneath us.
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(|e| ApiError::Connection {
            reason: e.to_string(),
        })?;
        self.check_status(response.status())?;
        Ok(response)
    }
}

#[async_trait]
impl AuthBackend for AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let response = self.post("/login", credentials).await?;
        let body: LoginResponse =
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        self.session.establish(&body.token, &body.user);
        tracing::info!(username = body.user.username(), "logged in");
        Ok(body.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post("/logout", &serde_json::json!({})).await;
        // Whatever the API said, the local session is gone.
        self.session.clear();
        match result {
            // An already-rejected token means there is nothing to end
            // server-side; the logout still succeeded locally.
            Ok(_) | Err(ApiError::Unauthorized) => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.post("/forgot-password", &serde_json::json!({ "email": email }))
            .await?;
        Ok(())
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post("/reset-password", request).await?;
        Ok(())
    }
}
