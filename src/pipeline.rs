//! Async action pipeline: every gateway call wrapped in pending/fulfilled/rejected
//! session transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call `login`/`logout`/`fetch_profile`/`update_profile` and await a
//! plain `Result`. The pipeline owns the session store and is its only writer;
//! persistence writes happen here, after the store has transitioned.
//!
//! CONCURRENCY
//! ===========
//! Methods take `&self` and run on one cooperative thread. Nothing stops a
//! second `login` while one is pending; the later resolution simply wins.
//! Callers disable their submit control while [`Session::is_pending`].
//!
//! ERROR HANDLING
//! ==============
//! Gateway failures collapse into one [`AuthFailure`] message. Logout never
//! fails: the local session clears even when the server cannot be told.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use tokio::sync::watch;

use crate::gateway::AuthGateway;
use crate::persistence::{Backends, PersistenceChoice, ProfilePersistence, TokenPersistence};
use crate::profile::{Profile, ProfileCache};
use crate::session::{AuthEvent, Credential, Session};
use crate::store::SessionStore;

/// Message shown when a profile call is attempted without a session.
pub const NOT_SIGNED_IN: &str = "You are not signed in.";

/// A failed action, reduced to the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    message: String,
}

impl AuthFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<crate::gateway::GatewayError> for AuthFailure {
    fn from(e: crate::gateway::GatewayError) -> Self {
        Self::new(e.to_string())
    }
}

pub struct AuthPipeline<G> {
    gateway: G,
    store: SessionStore,
    tokens: TokenPersistence,
    profile: ProfileCache,
}

impl<G: AuthGateway> AuthPipeline<G> {
    /// Rehydrate session and profile from `backends` and wire up `gateway`.
    #[must_use]
    pub fn start(gateway: G, backends: Backends) -> Self {
        let tokens = TokenPersistence::new(backends.clone());
        let store = SessionStore::initialize(&tokens);
        let profile = ProfileCache::rehydrate(ProfilePersistence::new(backends.durable));
        Self { gateway, store, tokens, profile }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.store.snapshot()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.store.subscribe()
    }

    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.profile.current()
    }

    #[must_use]
    pub fn subscribe_profile(&self) -> watch::Receiver<Option<Profile>> {
        self.profile.subscribe()
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Sign in and persist the credential in the backend picked by `remember_me`.
    ///
    /// `email` and `password` are forwarded as-is; shape checks belong to the form layer.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] carrying a user-facing message; the session
    /// is `LoggedOut` afterwards.
    pub async fn login(&self, email: &str, password: &str, remember_me: bool) -> Result<(), AuthFailure> {
        self.store.dispatch(AuthEvent::LoginStarted);

        match self.gateway.login(email, password).await {
            Ok(token) => {
                let choice = PersistenceChoice::from_remember_me(remember_me);
                self.store.dispatch(AuthEvent::LoginSucceeded(token.clone()));
                if let Err(e) = self.tokens.write(choice, &token) {
                    tracing::warn!(backend = choice.label(), error = %e, "credential write failed; session will not survive reload");
                }
                tracing::info!(backend = choice.label(), "login succeeded");
                Ok(())
            }
            Err(e) => {
                self.store.dispatch(AuthEvent::LoginFailed);
                tracing::warn!(error = %e, "login failed");
                Err(e.into())
            }
        }
    }

    /// Sign out. Always ends `LoggedOut` with the durable credential cleared.
    pub async fn logout(&self) {
        let token = self.store.snapshot().token().cloned();
        self.store.dispatch(AuthEvent::LogoutStarted);

        if let Err(e) = self.gateway.logout(token.as_ref()).await {
            tracing::debug!(error = %e, "logout notification failed; clearing local session anyway");
        }

        self.store.dispatch(AuthEvent::LogoutSucceeded);
        if let Err(e) = self.tokens.clear_durable() {
            tracing::warn!(error = %e, "durable credential clear failed");
        }
        tracing::info!("logged out");
    }

    /// Fetch the profile with the live credential and cache it.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] if no session is live or the request fails.
    /// The cached profile is left untouched on failure.
    pub async fn fetch_profile(&self) -> Result<Profile, AuthFailure> {
        let token = self.live_token()?;
        let profile = self.gateway.fetch_profile(&token).await.map_err(|e| {
            tracing::warn!(error = %e, "profile fetch failed");
            AuthFailure::from(e)
        })?;
        self.profile.replace(profile.clone());
        Ok(profile)
    }

    /// Save a new first/last name and cache the server's answer.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFailure`] if no session is live or the request fails.
    pub async fn update_profile(&self, profile: Profile) -> Result<Profile, AuthFailure> {
        let token = self.live_token()?;
        let saved = self.gateway.update_profile(&token, &profile).await.map_err(|e| {
            tracing::warn!(error = %e, "profile update failed");
            AuthFailure::from(e)
        })?;
        self.profile.replace(saved.clone());
        Ok(saved)
    }

    fn live_token(&self) -> Result<Credential, AuthFailure> {
        self.store
            .snapshot()
            .token()
            .cloned()
            .ok_or_else(|| AuthFailure::new(NOT_SIGNED_IN))
    }
}
