//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the core session store and profile cache. The root component
//! copies every change from the pipeline's watch channels into this struct,
//! so views read it reactively and never touch the pipeline for display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use argent::profile::Profile;
use argent::session::Session;

/// Session phase plus the last known profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub profile: Option<Profile>,
}

impl AuthState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// True while a login or logout is in flight.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.session.is_pending()
    }

    /// Name shown in the header next to "Sign Out".
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.first_name.as_str())
    }
}
