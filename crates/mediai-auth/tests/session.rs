use std::sync::{Arc, Mutex};

use mediai_auth::error::SessionError;
use mediai_auth::observer::SessionObserver;
use mediai_auth::provider::{DEMO_DISPLAY_NAME, DEMO_EMAIL, Identity, IdentityProvider};
use mediai_auth::session::{SessionState, SessionStore};
use mediai_core::models::notice::{Notice, NoticeLevel};
use mediai_core::storage_keys::SESSION_USER;
use mediai_storage::error::StorageError;
use mediai_storage::{FileStore, KeyValueStore, MemoryStore};

#[derive(Default)]
struct RecordingObserver {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingObserver {
    fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.lock().unwrap().iter().map(|n| n.level).collect()
    }

    fn titles(&self) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl SessionObserver for RecordingObserver {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

/// Every operation fails, as when the data directory is not writable.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk gone".to_string()))
    }
}

struct RejectingProvider;

impl IdentityProvider for RejectingProvider {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn authenticate(&self) -> Result<Identity, SessionError> {
        Err(SessionError::ProviderFailed {
            provider: "rejecting".to_string(),
            message: "popup closed".to_string(),
        })
    }
}

#[test]
fn fresh_storage_restores_signed_out() {
    let mut store = SessionStore::new(Arc::new(MemoryStore::new()));
    assert_eq!(store.restore(), SessionState::SignedOut);
    assert!(store.current().is_none());
}

#[test]
fn sign_in_creates_demo_user_with_prefixed_id() {
    let mut store = SessionStore::new(Arc::new(MemoryStore::new()));
    let user = store.sign_in().unwrap();

    assert!(user.id.starts_with("user-"));
    assert_eq!(user.display_name.as_deref(), Some(DEMO_DISPLAY_NAME));
    assert_eq!(user.email.as_deref(), Some(DEMO_EMAIL));
    assert!(user.avatar_url.is_some());
    assert_eq!(store.current(), Some(&user));
}

#[test]
fn each_sign_in_gets_a_fresh_id() {
    let mut store = SessionStore::new(Arc::new(MemoryStore::new()));
    let first = store.sign_in().unwrap();
    let second = store.sign_in().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.current(), Some(&second));
}

#[test]
fn restore_after_sign_in_returns_equal_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut first_run = SessionStore::new(Arc::new(FileStore::new(dir.path())));
    let user = first_run.sign_in().unwrap();
    drop(first_run);

    let mut second_run = SessionStore::new(Arc::new(FileStore::new(dir.path())));
    assert_eq!(second_run.restore(), SessionState::SignedIn(user));
}

#[test]
fn persisted_record_uses_camel_case_fields() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = SessionStore::new(storage.clone());
    let user = store.sign_in().unwrap();

    let raw = storage.get(SESSION_USER).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["id"], user.id.as_str());
    assert_eq!(json["displayName"], DEMO_DISPLAY_NAME);
    assert_eq!(json["email"], DEMO_EMAIL);
    assert!(json["avatarUrl"].is_string());
}

#[test]
fn sign_out_clears_memory_and_storage() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = SessionStore::new(storage.clone());
    store.sign_in().unwrap();

    store.sign_out();
    assert_eq!(store.state(), SessionState::SignedOut);
    assert_eq!(storage.get(SESSION_USER).unwrap(), None);

    let mut next_run = SessionStore::new(storage);
    assert_eq!(next_run.restore(), SessionState::SignedOut);
}

#[test]
fn sign_out_twice_matches_sign_out_once() {
    let storage = Arc::new(MemoryStore::new());
    let observer = Arc::new(RecordingObserver::default());
    let mut store = SessionStore::new(storage.clone()).with_observer(observer.clone());
    store.sign_in().unwrap();

    store.sign_out();
    let after_once = store.state();
    store.sign_out();

    assert_eq!(store.state(), after_once);
    assert!(storage.is_empty());
    assert_eq!(observer.titles(), vec!["Welcome to Medi AI", "Signed out"]);
}

#[test]
fn corrupt_record_restores_signed_out_and_is_purged() {
    let storage = Arc::new(MemoryStore::new());
    storage.set(SESSION_USER, "{\"id\": \"user-1\"").unwrap();

    let mut store = SessionStore::new(storage.clone());
    assert_eq!(store.restore(), SessionState::SignedOut);
    assert_eq!(storage.get(SESSION_USER).unwrap(), None);
}

#[test]
fn record_without_id_is_treated_as_corrupt() {
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(SESSION_USER, r#"{"displayName":"Nobody"}"#)
        .unwrap();

    let mut store = SessionStore::new(storage.clone());
    assert_eq!(store.restore(), SessionState::SignedOut);
    assert!(storage.is_empty());
}

#[test]
fn unavailable_storage_is_not_fatal() {
    let observer = Arc::new(RecordingObserver::default());
    let mut store = SessionStore::new(Arc::new(UnavailableStore)).with_observer(observer.clone());

    assert_eq!(store.restore(), SessionState::SignedOut);

    let user = store.sign_in().unwrap();
    assert_eq!(store.current(), Some(&user));

    store.sign_out();
    assert!(store.current().is_none());

    assert_eq!(
        observer.levels(),
        vec![
            NoticeLevel::Warning,
            NoticeLevel::Warning,
            NoticeLevel::Info,
            NoticeLevel::Warning,
            NoticeLevel::Info,
        ]
    );
}

#[test]
fn failed_provider_leaves_prior_session_untouched() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = SessionStore::new(storage.clone());
    let existing = store.sign_in().unwrap();
    let stored_before = storage.get(SESSION_USER).unwrap();

    let observer = Arc::new(RecordingObserver::default());
    let mut store = store
        .with_provider(Box::new(RejectingProvider))
        .with_observer(observer.clone());

    let err = store.sign_in().unwrap_err();
    assert!(matches!(err, SessionError::ProviderFailed { .. }));
    assert_eq!(store.current(), Some(&existing));
    assert_eq!(storage.get(SESSION_USER).unwrap(), stored_before);
    assert_eq!(observer.levels(), vec![NoticeLevel::Error]);
}

#[test]
fn corrupt_record_notifies_observer_once() {
    let storage = Arc::new(MemoryStore::new());
    storage.set(SESSION_USER, "not json at all").unwrap();
    let observer = Arc::new(RecordingObserver::default());

    let mut store = SessionStore::new(storage.clone()).with_observer(observer.clone());
    assert_eq!(store.restore(), SessionState::SignedOut);

    assert_eq!(observer.levels(), vec![NoticeLevel::Warning]);
    assert_eq!(observer.titles(), vec!["Session reset"]);
    assert!(storage.is_empty());
}

#[test]
fn non_utf8_session_file_is_purged_on_restore() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{SESSION_USER}.json"));
    std::fs::write(&path, [0xff, 0xfe, b'{', 0x80]).unwrap();
    let observer = Arc::new(RecordingObserver::default());

    let mut store =
        SessionStore::new(Arc::new(FileStore::new(dir.path()))).with_observer(observer.clone());
    assert_eq!(store.restore(), SessionState::SignedOut);

    assert!(!path.exists());
    assert_eq!(FileStore::new(dir.path()).get(SESSION_USER).unwrap(), None);
    assert_eq!(observer.titles(), vec!["Session reset"]);
}

#[test]
fn sign_out_while_signed_out_clears_stale_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{SESSION_USER}.json"));
    std::fs::write(&path, [0xff, 0xfe, b'{', 0x80]).unwrap();
    let observer = Arc::new(RecordingObserver::default());

    let mut store =
        SessionStore::new(Arc::new(FileStore::new(dir.path()))).with_observer(observer.clone());
    store.sign_out();

    assert!(!path.exists());
    assert!(store.current().is_none());
    assert!(observer.titles().is_empty());
}
