//! Session model and the login/logout transition reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the in-memory source of truth for "is this client signed in,
//! and with which credential". Only [`crate::store::SessionStore`] holds a
//! live instance; everything else reads snapshots.
//!
//! DESIGN
//! ======
//! The phase and the credential live in one enum so `is_logged_in()` can never
//! disagree with `token()`. The reducer is total: each event determines its
//! successor no matter which phase it arrives in, so when two requests race the
//! last one to resolve wins. [`is_nominal`] names the transitions a
//! well-behaved caller produces so the store can flag everything else.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque credential issued by the authentication service.
///
/// Never parsed or inspected. `Debug` is redacted so tokens stay out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Client-side authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No credential held.
    #[default]
    LoggedOut,
    /// A login request is in flight.
    LoggingIn,
    /// Signed in with the held credential.
    LoggedIn(Credential),
    /// A logout was requested and is being finalized.
    LoggingOut,
}

/// Events emitted by the action pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginStarted,
    LoginSucceeded(Credential),
    LoginFailed,
    LogoutStarted,
    LogoutSucceeded,
}

impl Session {
    /// Build the startup state from an optional rehydrated credential.
    #[must_use]
    pub fn from_credential(credential: Option<Credential>) -> Self {
        credential.map_or(Self::LoggedOut, Self::LoggedIn)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    #[must_use]
    pub fn token(&self) -> Option<&Credential> {
        match self {
            Self::LoggedIn(token) => Some(token),
            _ => None,
        }
    }

    /// True while a login or logout request is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::LoggingIn | Self::LoggingOut)
    }

    /// Short phase label for logs and status output.
    #[must_use]
    pub fn phase(&self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::LoggingIn => "logging_in",
            Self::LoggedIn(_) => "logged_in",
            Self::LoggingOut => "logging_out",
        }
    }

    /// Pure transition step: `(state, event) -> state`.
    #[must_use]
    pub fn apply(&self, event: &AuthEvent) -> Self {
        match event {
            AuthEvent::LoginStarted => Self::LoggingIn,
            AuthEvent::LoginSucceeded(token) => Self::LoggedIn(token.clone()),
            AuthEvent::LoginFailed | AuthEvent::LogoutSucceeded => Self::LoggedOut,
            AuthEvent::LogoutStarted => Self::LoggingOut,
        }
    }
}

/// Whether `event` is an expected transition out of `current`.
#[must_use]
pub fn is_nominal(current: &Session, event: &AuthEvent) -> bool {
    matches!(
        (current, event),
        (Session::LoggedOut, AuthEvent::LoginStarted)
            | (Session::LoggingIn, AuthEvent::LoginSucceeded(_) | AuthEvent::LoginFailed)
            | (Session::LoggedIn(_), AuthEvent::LogoutStarted)
            | (Session::LoggingOut, AuthEvent::LogoutSucceeded)
    )
}
