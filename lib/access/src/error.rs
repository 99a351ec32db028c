//! Error types for the access crate.
//!
//! Access denial is never an error here: the policy evaluator is total and
//! expresses denial as a routing decision. The only failure mode this crate
//! recognizes is a persisted identity record that cannot be parsed, and the
//! session resolver recovers from that locally.

use std::fmt;

/// Errors from reading a persisted identity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The stored record is not valid JSON or lacks required fields.
    MalformedRecord { reason: String },
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedRecord { reason } => {
                write!(f, "malformed identity record: {reason}")
            }
        }
    }
}

impl std::error::Error for IdentityError {}
