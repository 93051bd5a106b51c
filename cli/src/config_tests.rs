use std::fs;

use tempfile::TempDir;

use super::*;

fn setup() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml").to_string_lossy().to_string();
    (dir, path)
}

fn manager(path: &str) -> ConfigManager {
    ConfigManager::builder()
        .default_storage_dir("/tmp/r-cartcli")
        .path(path)
        .build()
        .unwrap()
}

#[test]
fn test_writes_defaults_when_file_missing() {
    let (_dir, path) = setup();

    let manager = manager(&path);

    let config = manager.get();
    assert_eq!(config.currency, DEFAULT_CURRENCY);
    assert_eq!(config.storage_dir, "/tmp/r-cartcli");

    let on_disk: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, config);
}

#[test]
fn test_reads_existing_file() {
    let (_dir, path) = setup();
    fs::write(&path, "currency: \"$\"\nstorage_dir: /data/lists\n").unwrap();

    let manager = manager(&path);

    let config = manager.get();
    assert_eq!(config.currency, "$");
    assert_eq!(config.storage_dir, "/data/lists");
}

#[test]
fn test_falls_back_to_defaults_on_parse_error() {
    let (_dir, path) = setup();
    fs::write(&path, "currency: [not, a, string\n").unwrap();

    let manager = manager(&path);

    assert_eq!(manager.get(), Config::new("/tmp/r-cartcli".to_string()));
    // the broken file is left alone
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "currency: [not, a, string\n"
    );
}

#[test]
fn test_update_config_persists() {
    let (_dir, path) = setup();
    let mut manager = manager(&path);

    let mut config = manager.get();
    config.currency = "€".to_string();
    manager.update_config(config).unwrap();

    assert_eq!(manager.get().currency, "€");

    let reloaded = self::manager(&path);
    assert_eq!(reloaded.get().currency, "€");
}

#[test]
fn test_build_requires_path() {
    let result = ConfigManager::builder()
        .default_storage_dir("/tmp/r-cartcli")
        .build();

    assert!(result.is_err());
}
