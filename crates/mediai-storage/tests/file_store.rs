use mediai_storage::error::StorageError;
use mediai_storage::{FileStore, KeyValueStore};

#[test]
fn missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("mediAiUser").unwrap(), None);
}

#[test]
fn value_survives_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::new(dir.path())
        .set("mediAiUser", r#"{"id":"user-1"}"#)
        .unwrap();

    let reopened = FileStore::new(dir.path());
    assert_eq!(
        reopened.get("mediAiUser").unwrap().as_deref(),
        Some(r#"{"id":"user-1"}"#)
    );
    assert!(dir.path().join("mediAiUser.json").exists());
    assert!(!dir.path().join("mediAiUser.json.tmp").exists());
}

#[test]
fn set_creates_missing_root_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("data"));
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn path_like_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    for key in ["", "../escape", "a/b", ".hidden"] {
        let err = store.set(key, "v").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)), "key {key:?}");
    }
}

#[cfg(unix)]
#[test]
fn written_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.set("k", "v").unwrap();
    let mode = std::fs::metadata(dir.path().join("k.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn root_that_is_a_file_surfaces_as_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    let store = FileStore::new(&blocker);
    let err = store.set("k", "v").unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
}

#[test]
fn non_utf8_value_is_an_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("k.json"), [0xff, 0xfe, b'{', 0x80]).unwrap();

    let store = FileStore::new(dir.path());
    let err = store.get("k").unwrap_err();
    assert!(matches!(err, StorageError::InvalidEncoding { ref key } if key == "k"));

    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}
