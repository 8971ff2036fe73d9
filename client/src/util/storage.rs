//! Web Storage backends for credential and profile persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` is the durable backend and `sessionStorage` the ephemeral
//! one. Outside the browser (native tests, `cargo check` without `csr`) both
//! behave as empty stores that refuse writes, so the core pipeline simply
//! starts logged out.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use argent::storage::{KeyValueStore, StorageError};

/// Which Web Storage area to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStore {
    /// `window.localStorage`: survives browser restarts.
    Local,
    /// `window.sessionStorage`: cleared when the tab closes.
    Session,
}

impl BrowserStore {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    #[cfg(feature = "csr")]
    fn storage(self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        let area = match self {
            Self::Local => window.local_storage(),
            Self::Session => window.session_storage(),
        };
        match area {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable(format!("{} disabled", self.label()))),
            Err(e) => Err(StorageError::Unavailable(format!("{}: {e:?}", self.label()))),
        }
    }
}

#[cfg(feature = "csr")]
fn js_failure(store: BrowserStore, e: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{}: {e:?}", store.label()))
}

#[cfg(feature = "csr")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| js_failure(*self, &e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| js_failure(*self, &e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(|e| js_failure(*self, &e))
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(format!("{} needs a browser", self.label())))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
