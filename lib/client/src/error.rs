//! Error types for the portal API client.

use std::fmt;

/// Errors from portal API calls.
///
/// `Unauthorized` is the one error hosts must act on: by the time it is
/// returned the client has already cleared the local session, and the user
/// should be navigated to the login view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the API.
    Connection { reason: String },
    /// The API rejected the session; local session state has been cleared.
    Unauthorized,
    /// The API answered with a non-success status.
    Status { status: u16 },
    /// The response body could not be parsed.
    InvalidResponse { reason: String },
}

impl ApiError {
    /// Returns true if the session was rejected and the user must log in
    /// again.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection { reason } => {
                write!(f, "connection failed: {reason}")
            }
            Self::Unauthorized => {
                write!(f, "session rejected by the API")
            }
            Self::Status { status } => {
                write!(f, "API returned status {status}")
            }
            Self::InvalidResponse { reason } => {
                write!(f, "invalid API response: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_display() {
        let err = ApiError::Connection {
            reason: "dns failure".to_string(),
        };
        assert!(err.to_string().contains("connection failed"));
        assert!(err.to_string().contains("dns failure"));
    }

    #[test]
    fn status_display() {
        let err = ApiError::Status { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn unauthorized_flag() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Status { status: 403 }.is_unauthorized());
    }
}
