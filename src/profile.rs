//! Account holder profile and its observable cache.
//!
//! The cache is rehydrated independently of the session and is only ever
//! overwritten, never cleared: a logout keeps showing the last-known name
//! until the next fetch replaces it.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::persistence::ProfilePersistence;

/// First/last name of the signed-in account holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
}

impl Profile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Last-known profile, observable and mirrored to durable storage.
pub struct ProfileCache {
    tx: watch::Sender<Option<Profile>>,
    persistence: ProfilePersistence,
}

impl ProfileCache {
    /// Build the cache from whatever the durable snapshot holds.
    #[must_use]
    pub fn rehydrate(persistence: ProfilePersistence) -> Self {
        let initial = persistence.load();
        tracing::debug!(cached = initial.is_some(), "profile cache rehydrated");
        let (tx, _rx) = watch::channel(initial);
        Self { tx, persistence }
    }

    #[must_use]
    pub fn current(&self) -> Option<Profile> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Profile>> {
        self.tx.subscribe()
    }

    /// Replace the cached profile in memory and in storage.
    ///
    /// A failed storage write is logged; the in-memory value still updates.
    pub fn replace(&self, profile: Profile) {
        if let Err(e) = self.persistence.store(&profile) {
            tracing::warn!(error = %e, "profile snapshot write failed");
        }
        self.tx.send_replace(Some(profile));
    }
}
