//! Client-side session ownership and route authorization.

mod guard;
mod session;

pub use guard::{evaluate, Access, GuardDecision};
pub use session::{Session, SessionStore};

#[cfg(test)]
pub(crate) use session::tests::{ngo_user, token_expiring_at};
