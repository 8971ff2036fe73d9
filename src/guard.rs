//! Access decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes call [`decide`] on every entry; nothing is cached. Unauthenticated
//! visitors always land on the fixed sign-in path; the requested destination
//! is not remembered.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::Session;

/// Sign-in entry point.
pub const LOGIN_PATH: &str = "/login";
/// Protected landing page after sign-in.
pub const PROFILE_PATH: &str = "/profile";

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

#[must_use]
pub fn can_enter(session: &Session) -> bool {
    session.is_logged_in()
}

/// Allow a protected view or redirect to [`LOGIN_PATH`].
#[must_use]
pub fn decide(session: &Session) -> Access {
    if can_enter(session) { Access::Allow } else { Access::Redirect(LOGIN_PATH) }
}

/// Where the sign-in page should send a visitor, if anywhere.
///
/// Someone already signed in skips the form and goes to [`PROFILE_PATH`].
#[must_use]
pub fn landing_for(session: &Session) -> Option<&'static str> {
    session.is_logged_in().then_some(PROFILE_PATH)
}
