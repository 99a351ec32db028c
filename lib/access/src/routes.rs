//! Static view registry for the portal.
//!
//! Maps every route the portal serves to its access policy. The role sets
//! are spelled out per view, exactly as the portal grants them: admin views
//! admit admin only, HR views admit HR manager and admin, employee
//! self-service views admit all three roles.

use crate::policy::{AccessPolicy, RouteDecision, evaluate};
use crate::role::Role;
use crate::session::AuthState;

/// The landing page, also the target for unmatched paths.
pub const HOME_PATH: &str = "/";

/// The login view, target of every unauthenticated navigation.
pub const LOGIN_PATH: &str = "/login";

/// A route and its access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    /// Route path, matched exactly.
    pub path: &'static str,
    /// Who may reach this view.
    pub policy: AccessPolicy,
}

impl ViewDescriptor {
    /// Creates a view descriptor.
    #[must_use]
    pub const fn new(path: &'static str, policy: AccessPolicy) -> Self {
        Self { path, policy }
    }
}

/// The portal's route table.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    views: Vec<ViewDescriptor>,
}

impl ViewRegistry {
    /// Creates a registry from a list of descriptors.
    #[must_use]
    pub fn new(views: Vec<ViewDescriptor>) -> Self {
        Self { views }
    }

    /// Returns the registry for the employee-management portal.
    #[must_use]
    pub fn portal() -> Self {
        use AccessPolicy::{AnonymousPreferred, AnyAuthenticated, Public, Roles};

        Self::new(vec![
            ViewDescriptor::new(HOME_PATH, Public),
            ViewDescriptor::new(LOGIN_PATH, AnonymousPreferred),
            ViewDescriptor::new("/register", AnonymousPreferred),
            ViewDescriptor::new("/forgot-password", AnonymousPreferred),
            ViewDescriptor::new("/reset-password", AnonymousPreferred),
            ViewDescriptor::new("/profile", AnyAuthenticated),
            // Admin
            ViewDescriptor::new("/admin/dashboard", Roles(&[Role::Admin])),
            ViewDescriptor::new("/admin/users", Roles(&[Role::Admin])),
            ViewDescriptor::new("/admin/employees", Roles(&[Role::Admin])),
            ViewDescriptor::new("/admin/attendance", Roles(&[Role::Admin])),
            ViewDescriptor::new("/admin/payroll", Roles(&[Role::Admin])),
            ViewDescriptor::new("/admin/logs", Roles(&[Role::Admin])),
            // HR manager
            ViewDescriptor::new("/hr/dashboard", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/employees", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/attendance", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/time-settings", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/leave-requests", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/payroll", Roles(&[Role::HrManager, Role::Admin])),
            ViewDescriptor::new("/hr/reports", Roles(&[Role::HrManager, Role::Admin])),
            // Employee self-service
            ViewDescriptor::new(
                "/employee/dashboard",
                Roles(&[Role::Employee, Role::HrManager, Role::Admin]),
            ),
            ViewDescriptor::new(
                "/employee/attendance",
                Roles(&[Role::Employee, Role::HrManager, Role::Admin]),
            ),
            ViewDescriptor::new(
                "/employee/leave-request",
                Roles(&[Role::Employee, Role::HrManager, Role::Admin]),
            ),
            ViewDescriptor::new(
                "/employee/leave-requests",
                Roles(&[Role::Employee, Role::HrManager, Role::Admin]),
            ),
            ViewDescriptor::new(
                "/employee/payslips",
                Roles(&[Role::Employee, Role::HrManager, Role::Admin]),
            ),
        ])
    }

    /// Returns the registered views.
    #[must_use]
    pub fn views(&self) -> &[ViewDescriptor] {
        &self.views
    }

    /// Looks up a view by exact path.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&ViewDescriptor> {
        self.views.iter().find(|v| v.path == path)
    }

    /// Resolves a navigation to a routing decision.
    ///
    /// Unregistered paths redirect to the landing page; registered paths
    /// are evaluated against the current authentication state.
    #[must_use]
    pub fn resolve(&self, path: &str, auth: &AuthState) -> RouteDecision {
        match self.find(path) {
            Some(view) => {
                let decision = evaluate(view.policy, auth);
                tracing::trace!(path, ?decision, "navigation resolved");
                decision
            }
            None => {
                tracing::trace!(path, "unregistered path");
                RouteDecision::Redirect(HOME_PATH)
            }
        }
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::portal()
    }
}
