//! Route guard.
//!
//! A pure function of the current session and the access a view requires. It is
//! evaluated on every navigation; nothing is cached between calls.

use crate::auth::Session;
use crate::models::Role;

/// What a view requires before it may mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Only visitors without a session (login, register).
    Guest,
    /// Any signed-in user.
    Authenticated,
    /// A signed-in user with this role.
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

pub fn evaluate(session: Option<&Session>, access: Access) -> GuardDecision {
    match (access, session) {
        (Access::Public, _) => GuardDecision::Allow,
        (Access::Guest, None) => GuardDecision::Allow,
        (Access::Guest, Some(_)) => GuardDecision::RedirectToHome,
        (Access::Authenticated | Access::Role(_), None) => GuardDecision::RedirectToLogin,
        (Access::Authenticated, Some(_)) => GuardDecision::Allow,
        (Access::Role(required), Some(session)) => {
            if session.role() == required {
                GuardDecision::Allow
            } else {
                GuardDecision::RedirectToHome
            }
        }
    }
}
