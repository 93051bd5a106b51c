use tempfile::tempdir;

use super::*;

#[test]
fn returns_none_for_missing_key() {
    let dir = tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path());
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn writes_and_reads_values() {
    let dir = tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path().join("nested"));

    store.set("lists", "{\"a\":[]}").unwrap();

    assert!(dir.path().join("nested").join("lists.json").exists());
    assert_eq!(store.get("lists").unwrap(), Some("{\"a\":[]}".to_string()));
}

#[test]
fn overwrites_existing_values() {
    let dir = tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path());

    store.set("lists", "first").unwrap();
    store.set("lists", "second").unwrap();

    assert_eq!(store.get("lists").unwrap(), Some("second".to_string()));
}

#[test]
fn rejects_keys_escaping_directory() {
    let dir = tempdir().unwrap();
    let store = FileKeyValueStore::new(dir.path());

    assert!(store.path_for("").is_err());
    assert!(store.path_for("../lists").is_err());
    assert!(store.path_for("a/b").is_err());
    assert!(store.set("..\\lists", "value").is_err());
}

#[test]
fn returns_error_when_path_is_not_readable_file() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lists.json")).unwrap();
    let store = FileKeyValueStore::new(dir.path());

    assert!(store.get("lists").is_err());
}
