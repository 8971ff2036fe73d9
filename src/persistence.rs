//! Durable copies of the credential and the profile snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The live [`Session`](crate::session::Session) is authoritative at runtime.
//! These stores are written after state changes and only read back once, at
//! startup, to rehydrate.
//!
//! REHYDRATION
//! ===========
//! Both backends are consulted in [`REHYDRATION_PRECEDENCE`] order and the
//! first readable credential wins, so a remembered login outranks a
//! tab-scoped one. Unreadable or undecodable values count as absent.
//!
//! TRADE-OFFS
//! ==========
//! A login writes only the backend chosen by "remember me"; the other one is
//! left as-is. An older remembered credential therefore coexists with a newer
//! tab-scoped one until logout clears the durable copy.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::profile::Profile;
use crate::session::Credential;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the JSON-encoded credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the persisted profile snapshot.
pub const PROFILE_KEY: &str = "persist:root";

/// Which backend receives a credential. Chosen per login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceChoice {
    /// Survives restarts ("remember me").
    Durable,
    /// Scoped to the current browsing session.
    Ephemeral,
}

impl PersistenceChoice {
    #[must_use]
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me { Self::Durable } else { Self::Ephemeral }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Durable => "durable",
            Self::Ephemeral => "ephemeral",
        }
    }
}

/// Backends consulted at startup, highest precedence first.
pub const REHYDRATION_PRECEDENCE: [PersistenceChoice; 2] = [PersistenceChoice::Durable, PersistenceChoice::Ephemeral];

/// Pick the startup credential from per-backend reads.
///
/// `read` is called in precedence order until one yields a credential.
pub fn select_credential<F>(mut read: F) -> Option<(PersistenceChoice, Credential)>
where
    F: FnMut(PersistenceChoice) -> Option<Credential>,
{
    REHYDRATION_PRECEDENCE
        .iter()
        .find_map(|&choice| read(choice).map(|token| (choice, token)))
}

/// The two storage backends available to the client.
#[derive(Clone)]
pub struct Backends {
    pub durable: Rc<dyn KeyValueStore>,
    pub ephemeral: Rc<dyn KeyValueStore>,
}

impl Backends {
    pub fn new(durable: impl KeyValueStore + 'static, ephemeral: impl KeyValueStore + 'static) -> Self {
        Self { durable: Rc::new(durable), ephemeral: Rc::new(ephemeral) }
    }

    #[must_use]
    pub fn get(&self, choice: PersistenceChoice) -> &dyn KeyValueStore {
        match choice {
            PersistenceChoice::Durable => self.durable.as_ref(),
            PersistenceChoice::Ephemeral => self.ephemeral.as_ref(),
        }
    }
}

// =============================================================================
// TOKEN
// =============================================================================

/// Credential persistence across the durable and ephemeral backends.
#[derive(Clone)]
pub struct TokenPersistence {
    backends: Backends,
}

impl TokenPersistence {
    #[must_use]
    pub fn new(backends: Backends) -> Self {
        Self { backends }
    }

    /// Read and decode the credential held by one backend.
    #[must_use]
    pub fn read(&self, choice: PersistenceChoice) -> Option<Credential> {
        let raw = match self.backends.get(choice).get(TOKEN_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(backend = choice.label(), error = %e, "credential read failed");
                return None;
            }
        };
        decode_credential(&raw).or_else(|| {
            tracing::warn!(backend = choice.label(), "ignoring undecodable stored credential");
            None
        })
    }

    /// Startup lookup honoring [`REHYDRATION_PRECEDENCE`].
    #[must_use]
    pub fn rehydrate(&self) -> Option<(PersistenceChoice, Credential)> {
        select_credential(|choice| self.read(choice))
    }

    /// Write the credential into exactly the chosen backend.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    pub fn write(&self, choice: PersistenceChoice, token: &Credential) -> Result<(), StorageError> {
        let raw = serde_json::to_string(token).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.backends.get(choice).set(TOKEN_KEY, &raw)
    }

    /// Remove the durable credential. The ephemeral one expires with the tab.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the removal.
    pub fn clear_durable(&self) -> Result<(), StorageError> {
        self.backends.durable.remove(TOKEN_KEY)
    }
}

/// Stored credentials are JSON strings. Empty strings count as absent.
fn decode_credential(raw: &str) -> Option<Credential> {
    match serde_json::from_str::<Option<Credential>>(raw) {
        Ok(Some(token)) if !token.as_str().is_empty() => Some(token),
        _ => None,
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ProfileSnapshot {
    profile: Option<Profile>,
}

/// Durable cache of the last-known profile.
#[derive(Clone)]
pub struct ProfilePersistence {
    store: Rc<dyn KeyValueStore>,
}

impl ProfilePersistence {
    #[must_use]
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the cached profile, treating unreadable data as absent.
    #[must_use]
    pub fn load(&self) -> Option<Profile> {
        let raw = match self.store.get(PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "profile snapshot read failed");
                return None;
            }
        };
        match serde_json::from_str::<ProfileSnapshot>(&raw) {
            Ok(snapshot) => snapshot.profile,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring corrupt profile snapshot");
                None
            }
        }
    }

    /// Overwrite the cached profile wholesale.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    pub fn store(&self, profile: &Profile) -> Result<(), StorageError> {
        let snapshot = ProfileSnapshot { profile: Some(profile.clone()) };
        let raw = serde_json::to_string(&snapshot).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.store.set(PROFILE_KEY, &raw)
    }
}
