//! Session file behaviour

use bionary::FileTokenStore;
use bionary_core::TokenStore;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join(".bionary").join("session.json");
    let store = FileTokenStore::new(&path);

    store.save("tok-1").unwrap();

    assert!(path.exists());
    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[test]
fn test_session_file_format() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));
    store.save("tok-1").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({"token": "tok-1"}));
}

#[test]
fn test_save_replaces_previous_token() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));

    store.save("old").unwrap();
    store.save("new").unwrap();

    assert_eq!(store.load().as_deref(), Some("new"));
}

#[test]
fn test_missing_file_means_signed_out() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));

    assert_eq!(store.load(), None);
    assert!(!store.is_signed_in());
    store.clear().unwrap();
}

#[test]
fn test_corrupt_file_means_signed_out() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").unwrap();

    let store = FileTokenStore::new(&path);
    assert_eq!(store.load(), None);

    // A fresh login overwrites the corrupt file
    store.save("tok-2").unwrap();
    assert_eq!(store.load().as_deref(), Some("tok-2"));
}

#[test]
fn test_empty_token_is_not_a_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, r#"{"token": ""}"#).unwrap();

    let store = FileTokenStore::new(&path);
    assert!(!store.is_signed_in());
}

#[test]
fn test_clear_removes_file() {
    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));
    store.save("tok-1").unwrap();

    store.clear().unwrap();

    assert!(!store.path().exists());
    assert!(!store.is_signed_in());
}

#[cfg(unix)]
#[test]
fn test_session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = FileTokenStore::new(dir.path().join("session.json"));
    store.save("tok-1").unwrap();

    let mode = fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
