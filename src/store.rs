//! Observable container for the live [`Session`].
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` exists per client and is handed to consumers by
//! reference. Views and the access guard read snapshots or subscribe; only
//! the action pipeline dispatches events into it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tokio::sync::watch;

use crate::persistence::TokenPersistence;
use crate::session::{AuthEvent, Session, is_nominal};

pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Rehydrate the startup session from persisted credentials.
    ///
    /// Call once, before anything reads session state.
    #[must_use]
    pub fn initialize(tokens: &TokenPersistence) -> Self {
        let session = match tokens.rehydrate() {
            Some((choice, token)) => {
                tracing::info!(backend = choice.label(), "session rehydrated");
                Session::LoggedIn(token)
            }
            None => {
                tracing::debug!("no persisted credential; starting logged out");
                Session::LoggedOut
            }
        };
        Self::with_session(session)
    }

    /// Start from an explicit session, bypassing storage.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        let (tx, _rx) = watch::channel(session);
        Self { tx }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Apply one event and publish the successor state.
    pub(crate) fn dispatch(&self, event: AuthEvent) -> Session {
        let mut next = Session::LoggedOut;
        self.tx.send_modify(|state| {
            if !is_nominal(state, &event) {
                tracing::warn!(from = state.phase(), ?event, "off-table session transition");
            }
            *state = state.apply(&event);
            next = state.clone();
        });
        tracing::debug!(phase = next.phase(), "session transition");
        next
    }
}
