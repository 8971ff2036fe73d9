//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the sign-in page apply identical redirect behavior,
//! driven by the core guard so the native and browser frontends agree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use argent::guard::{self, Access};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect target for a protected view, or `None` to render it.
pub fn should_redirect_unauth(state: &AuthState) -> Option<&'static str> {
    match guard::decide(&state.session) {
        Access::Allow => None,
        Access::Redirect(path) => Some(path),
    }
}

/// Redirect target for the sign-in page when someone is already signed in.
pub fn should_skip_login(state: &AuthState) -> Option<&'static str> {
    guard::landing_for(&state.session)
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Re-evaluate the guard whenever auth changes; leave the page on failure.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = should_redirect_unauth(&auth.get()) {
            navigate(path, replace_history());
        }
    });
}

/// Send a signed-in visitor from the sign-in page to the profile.
pub fn install_login_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = should_skip_login(&auth.get()) {
            navigate(path, replace_history());
        }
    });
}
