//! Role types for portal access control.
//!
//! Every signed-in user carries exactly one role. Roles gate which views a
//! user may reach and decide where they land after authentication. Which
//! roles may reach a given view is enumerated per view in the route table;
//! it is never derived from a role hierarchy.

use serde::{Deserialize, Serialize};

/// Generic landing view for authenticated users whose role satisfies no
/// role table entry (missing, or an unrecognized value from the server).
pub const FALLBACK_HOME: &str = "/profile";

/// Portal role assigned to a user account.
///
/// The portal uses three levels of access:
/// - `Admin`: Full oversight of users, employees, attendance, and payroll
/// - `HrManager`: HR operations plus everything an employee can reach
/// - `Employee`: Self-service views only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administrator with full platform oversight.
    Admin,
    /// HR manager handling employees, attendance, and leave requests.
    HrManager,
    /// Employee with self-service access to their own records.
    Employee,
}

impl Role {
    /// Returns the role name as stored in identity records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HrManager => "hr_manager",
            Self::Employee => "employee",
        }
    }

    /// Parses a role from its stored string form.
    ///
    /// Unrecognized values yield `None` rather than an error; an unknown
    /// role is treated as satisfying no role requirement.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "hr_manager" => Some(Self::HrManager),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }

    /// Returns the default landing view for this role.
    #[must_use]
    pub fn home_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::HrManager => "/hr/dashboard",
            Self::Employee => "/employee/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the landing view for an optional role.
///
/// Total over all inputs: known roles map to their dashboard, a missing or
/// unknown role maps to [`FALLBACK_HOME`]. Used both as the denial redirect
/// target and as the post-login destination.
#[must_use]
pub fn role_home(role: Option<Role>) -> &'static str {
    role.map_or(FALLBACK_HOME, |r| r.home_path())
}
