//! Credential persistence bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! At startup the bridge reads the stored snapshot and hands its token to
//! `AuthHandler::rehydrate`; afterwards it subscribes to the session store
//! and rewrites the `auth` slice on every transition.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unreadable snapshot means "start logged out". Both cases are
//! reported as `PersistenceError` for logging only.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::{Deserialize, Serialize};

use crate::state::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("no persisted session")]
    Unavailable,
    #[error("persisted session unreadable: {0}")]
    Corrupt(String),
}

/// The persisted `auth` slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedAuth {
    #[serde(default)]
    pub is_logged_in: bool,
    #[serde(default)]
    pub token: String,
}

/// Whole stored blob; only `auth` is persisted today.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub auth: PersistedAuth,
}

impl PersistedState {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            auth: PersistedAuth {
                is_logged_in: session.is_logged_in(),
                token: session.credential().unwrap_or_default().to_owned(),
            },
        }
    }
}

pub struct CredentialBridge<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore + 'static> CredentialBridge<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Read the stored snapshot.
    ///
    /// # Errors
    ///
    /// `Unavailable` when nothing is stored, `Corrupt` when it does not parse.
    pub fn load(&self) -> Result<PersistedState, PersistenceError> {
        let raw = self.storage.load(&self.key).ok_or(PersistenceError::Unavailable)?;
        serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt(e.to_string()))
    }

    /// Stored token, or `None` (logged out) for any load failure.
    pub fn restore(&self) -> Option<String> {
        match self.load() {
            Ok(state) if !state.auth.token.is_empty() => Some(state.auth.token),
            Ok(_) => None,
            Err(PersistenceError::Unavailable) => {
                log::debug!("no persisted session under {}", self.key);
                None
            }
            Err(e) => {
                log::warn!("{e}; starting logged out");
                self.storage.remove(&self.key);
                None
            }
        }
    }

    /// Write the `auth` slice for `session`.
    pub fn persist(&self, session: &Session) {
        match serde_json::to_string(&PersistedState::from_session(session)) {
            Ok(raw) => self.storage.save(&self.key, &raw),
            Err(e) => log::warn!("session not persisted: {e}"),
        }
    }

    /// Persist every future session transition.
    pub fn attach(self, store: &SessionStore) {
        store.subscribe(move |session| self.persist(session));
    }
}
