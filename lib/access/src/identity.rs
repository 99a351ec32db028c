//! Identity domain type.
//!
//! An `Identity` is the signed-in principal as persisted on the client after
//! login: the username, the role the server reported, and a few opaque
//! profile fields the policy layer ignores. Absence of an identity means
//! "anonymous."

use serde::{Deserialize, Serialize};

use crate::error::IdentityError;
use crate::role::Role;

/// The signed-in principal.
///
/// The role is kept in its raw string form so that a value this build does
/// not recognize still round-trips through storage unchanged. Policy checks
/// go through [`Identity::role`], which parses on demand; an unrecognized
/// value simply satisfies no role requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account username.
    username: String,
    /// Role as reported by the server (e.g., "admin", "hr_manager").
    role: String,
    /// Email address, if the profile has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Display name, if the profile has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl Identity {
    /// Creates an identity with the given username and raw role value.
    #[must_use]
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            email: None,
            display_name: None,
        }
    }

    /// Creates an identity with a known role.
    #[must_use]
    pub fn with_role(username: impl Into<String>, role: Role) -> Self {
        Self::new(username, role.as_str())
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: Option<String>) -> Self {
        self.display_name = name;
        self
    }

    /// Returns the account username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the parsed role, or `None` if the stored value is not a
    /// role this build recognizes.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Returns the raw role string as the server reported it.
    #[must_use]
    pub fn role_str(&self) -> &str {
        &self.role
    }

    /// Returns the email address, if present.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the display name, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Parses an identity from its persisted JSON record.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MalformedRecord`] if the record is not valid
    /// JSON or lacks required fields. The session resolver treats this as an
    /// absent identity rather than surfacing it.
    pub fn from_json(record: &str) -> Result<Self, IdentityError> {
        serde_json::from_str(record).map_err(|e| IdentityError::MalformedRecord {
            reason: e.to_string(),
        })
    }

    /// Serializes the identity to its persisted JSON record.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Identity contains only string fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_with_known_role() {
        let identity = Identity::with_role("alice", Role::HrManager);
        assert_eq!(identity.username(), "alice");
        assert_eq!(identity.role(), Some(Role::HrManager));
        assert_eq!(identity.role_str(), "hr_manager");
    }

    #[test]
    fn unknown_role_parses_to_none_but_survives() {
        let identity = Identity::new("bob", "guest");
        assert_eq!(identity.role(), None);
        assert_eq!(identity.role_str(), "guest");
    }

    #[test]
    fn builder_sets_profile_fields() {
        let identity = Identity::with_role("alice", Role::Admin)
            .with_email(Some("alice@example.com".to_string()))
            .with_display_name(Some("Alice".to_string()));

        assert_eq!(identity.email(), Some("alice@example.com"));
        assert_eq!(identity.display_name(), Some("Alice"));
    }

    #[test]
    fn json_round_trip() {
        let identity = Identity::with_role("alice", Role::Employee)
            .with_email(Some("alice@example.com".to_string()));

        let record = identity.to_json();
        let parsed = Identity::from_json(&record).expect("parse");
        assert_eq!(parsed, identity);
    }

    #[test]
    fn json_round_trip_preserves_unknown_role() {
        let identity = Identity::new("bob", "guest");
        let parsed = Identity::from_json(&identity.to_json()).expect("parse");
        assert_eq!(parsed.role_str(), "guest");
        assert_eq!(parsed.role(), None);
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Identity::from_json("not json").expect_err("should fail");
        let IdentityError::MalformedRecord { reason } = err;
        assert!(!reason.is_empty());
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        assert!(Identity::from_json(r#"{"username": "alice"}"#).is_err());
    }

    #[test]
    fn from_json_accepts_extra_fields() {
        let record = r#"{"username": "alice", "role": "admin", "department": "IT"}"#;
        let parsed = Identity::from_json(record).expect("parse");
        assert_eq!(parsed.role(), Some(Role::Admin));
    }
}
