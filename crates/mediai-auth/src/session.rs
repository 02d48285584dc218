use std::sync::Arc;

use mediai_core::models::notice::Notice;
use mediai_core::models::user::UserRecord;
use mediai_core::storage_keys;
use mediai_storage::KeyValueStore;
use mediai_storage::error::StorageError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;
use crate::observer::{NoopObserver, SessionObserver};
use crate::provider::{DemoIdentityProvider, IdentityProvider};

/// Whether a user is signed in, as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    SignedOut,
    SignedIn(UserRecord),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            SessionState::SignedIn(user) => Some(user),
            SessionState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Holds at most one [`UserRecord`] and mirrors it into durable storage.
///
/// Storage writes happen before `sign_in`/`sign_out` return. Storage
/// failures never abort an operation: the in-memory state still changes and
/// the failure is logged and sent to the observer.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    provider: Box<dyn IdentityProvider>,
    observer: Arc<dyn SessionObserver>,
    current: Option<UserRecord>,
}

impl SessionStore {
    /// A signed-out store backed by `storage`, using the demo identity
    /// provider and no observer. Call [`SessionStore::restore`] to pick up a
    /// persisted session.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            provider: Box::new(DemoIdentityProvider),
            observer: Arc::new(NoopObserver),
            current: None,
        }
    }

    pub fn with_provider(mut self, provider: Box<dyn IdentityProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn current(&self) -> Option<&UserRecord> {
        self.current.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match &self.current {
            Some(user) => SessionState::SignedIn(user.clone()),
            None => SessionState::SignedOut,
        }
    }

    /// Load the persisted session, if any.
    ///
    /// A record that cannot be decoded or parsed is purged from storage and
    /// treated as signed out. Read failures are reported and also yield
    /// signed out.
    pub fn restore(&mut self) -> SessionState {
        self.current = match self.storage.get(storage_keys::SESSION_USER) {
            Ok(Some(raw)) => match UserRecord::from_json(&raw) {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, "session restored");
                    Some(user)
                }
                Err(e) => {
                    self.discard_corrupt_record(e.into());
                    None
                }
            },
            Ok(None) => {
                tracing::debug!("no stored session");
                None
            }
            Err(e @ StorageError::InvalidEncoding { .. }) => {
                self.discard_corrupt_record(SessionError::UnreadableSessionRecord(e));
                None
            }
            Err(e) => {
                self.report_persistence_failure(e.into());
                None
            }
        };
        self.state()
    }

    /// Start a new session with a fresh id and persist it.
    ///
    /// Replaces any current session. Fails only when the identity provider
    /// fails, in which case memory and storage are left as they were.
    pub fn sign_in(&mut self) -> Result<UserRecord, SessionError> {
        let identity = match self.provider.authenticate() {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), error = %e, "sign-in failed");
                self.observer.notify(&Notice::error(
                    "Authentication failed",
                    "Failed to sign in. Please try again.",
                ));
                return Err(e);
            }
        };

        let user = UserRecord {
            id: format!("user-{}", Uuid::new_v4()),
            display_name: identity.display_name,
            email: identity.email,
            avatar_url: identity.avatar_url,
        };

        if let Err(e) =
            mediai_storage::state::save_json(&*self.storage, storage_keys::SESSION_USER, &user)
        {
            self.report_persistence_failure(e.into());
        }
        self.current = Some(user.clone());

        tracing::info!(user_id = %user.id, provider = self.provider.name(), "signed in");
        self.observer.notify(&Notice::info(
            "Welcome to Medi AI",
            "You've successfully signed in!",
        ));
        Ok(user)
    }

    /// End the current session and remove it from storage.
    ///
    /// Storage is cleared even when no session is held in memory, so a stale
    /// entry never outlives a sign-out. Only an actual session end notifies.
    pub fn sign_out(&mut self) {
        if let Err(e) = self.storage.remove(storage_keys::SESSION_USER) {
            self.report_persistence_failure(e.into());
        }

        let Some(user) = self.current.take() else {
            tracing::debug!("sign-out requested while signed out");
            return;
        };

        tracing::info!(user_id = %user.id, "signed out");
        self.observer.notify(&Notice::info(
            "Signed out",
            "You've been successfully signed out.",
        ));
    }

    fn discard_corrupt_record(&self, err: SessionError) {
        tracing::warn!(error = %err, "discarding stored session record");
        if let Err(e) = self.storage.remove(storage_keys::SESSION_USER) {
            self.report_persistence_failure(e.into());
        }
        self.observer.notify(&Notice::warning(
            "Session reset",
            "Your saved session could not be read and was cleared. Please sign in again.",
        ));
    }

    fn report_persistence_failure(&self, err: SessionError) {
        tracing::warn!(error = %err, "session storage failure (continuing in memory)");
        self.observer.notify(&Notice::warning(
            "Storage unavailable",
            "Your session could not be saved on this device.",
        ));
    }
}
