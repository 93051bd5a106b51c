use r_cartlib::{item::FieldValue, storage::file::FileKeyValueStore};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

use crate::prompt::MockPrompter;

use super::*;

fn default_args() -> Args {
    Args {
        config: None,
        storage_dir: None,
        json: false,
        debug: false,
        command: None,
    }
}

fn setup() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        currency: "₦".to_string(),
        storage_dir: dir.path().join("lists").to_string_lossy().to_string(),
    };
    (dir, config)
}

fn seed_weekly(config: &Config) {
    let store = create_store(config);
    store.dispatch(Action::AddItem {
        name: "Rice".to_string(),
        quantity: Some(FieldValue::from("Derica")),
        amount: Some(FieldValue::from(500)),
    });
    store.dispatch(Action::add("Milk", Some("2".into()), Some("300".into())));
    store.dispatch(Action::SaveNamed(Some("Weekly".to_string())));
}

#[test]
fn initializes_logger() {
    let args = Args {
        debug: true,
        ..default_args()
    };

    initialize_logger(&args).unwrap();
}

#[test]
fn prints_config() {
    let (_dir, config) = setup();
    print_config(&default_args(), &config);
}

#[test]
fn parses_subcommands() {
    let args = Args::parse_from(["r-cartcli"]);
    assert_eq!(args.command, None);

    let args =
        Args::parse_from(["r-cartcli", "--json", "show", "Weekly Groceries"]);
    assert!(args.json);
    assert_eq!(
        args.command,
        Some(Commands::Show {
            name: "Weekly Groceries".to_string()
        })
    );

    let args = Args::parse_from(["r-cartcli", "delete", "Weekly", "--yes"]);
    assert_eq!(
        args.command,
        Some(Commands::Delete {
            name: "Weekly".to_string(),
            yes: true
        })
    );
}

#[test]
fn resolves_config_from_file_and_overrides_storage_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yml");
    fs::write(&config_path, "currency: \"$\"\nstorage_dir: /srv/lists\n")
        .unwrap();

    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..default_args()
    };
    let (_, config) = resolve_config(&args).unwrap();
    assert_eq!(config.currency, "$");
    assert_eq!(config.storage_dir, "/srv/lists");

    let args = Args {
        storage_dir: Some("/tmp/elsewhere".to_string()),
        ..args
    };
    let (manager, config) = resolve_config(&args).unwrap();
    assert_eq!(config.storage_dir, "/tmp/elsewhere");
    // the override is not written back
    assert_eq!(manager.get().storage_dir, "/srv/lists");
}

#[test]
fn sets_currency_in_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.yml");
    let args = Args {
        config: Some(config_path.to_string_lossy().to_string()),
        ..default_args()
    };

    let (mut manager, _) = resolve_config(&args).unwrap();
    let config = set_currency(&mut manager, " $ ").unwrap();
    assert_eq!(config.currency, "$");

    let (_, reloaded) = resolve_config(&args).unwrap();
    assert_eq!(reloaded.currency, "$");

    assert!(set_currency(&mut manager, "  ").is_err());
}

#[test]
fn saved_lists_persist_to_storage_dir() {
    let (_dir, config) = setup();
    seed_weekly(&config);

    let kv = FileKeyValueStore::new(&config.storage_dir);
    assert!(kv.path_for("savedShoppingLists").unwrap().exists());

    let store = create_store(&config);
    assert_eq!(store.get_state().saved_list_names(), vec!["Weekly"]);
}

#[test]
fn lists_saved_as_table_and_json() {
    let (_dir, config) = setup();
    seed_weekly(&config);
    let store = create_store(&config);

    let table = list_saved(&store, false, "₦").unwrap();
    assert!(table.contains("Weekly"));
    assert!(table.contains("₦800"));

    let json: Value =
        serde_json::from_str(&list_saved(&store, true, "₦").unwrap()).unwrap();
    assert_eq!(json[0]["name"], "Weekly");
    assert_eq!(json[0]["total"], 800.0);
}

#[test]
fn shows_saved_list() {
    let (_dir, config) = setup();
    seed_weekly(&config);
    let store = create_store(&config);

    let out = show_saved(&store, "Weekly", false, "₦").unwrap();
    assert!(out.starts_with("Weekly\n"));
    assert!(out.contains("Derica"));
    assert!(out.ends_with("Total Amount: ₦800"));

    let err = show_saved(&store, "Party", false, "₦").unwrap_err();
    assert!(err.to_string().contains("saved lists: Weekly"));
}

#[test]
fn deletes_saved_list_after_confirmation() {
    let (_dir, config) = setup();
    seed_weekly(&config);
    let store = create_store(&config);

    let mut prompter = MockPrompter::new();
    prompter
        .expect_confirm()
        .withf(|m| m == "Are you sure you want to delete \"Weekly\"?")
        .times(1)
        .returning(|_| Ok(true));

    assert!(delete_saved(&store, &prompter, "Weekly", false).unwrap());
    assert!(create_store(&config).get_state().saved_lists.is_empty());
}

#[test]
fn delete_declined_keeps_saved_list() {
    let (_dir, config) = setup();
    seed_weekly(&config);
    let store = create_store(&config);

    let mut prompter = MockPrompter::new();
    prompter.expect_confirm().times(1).returning(|_| Ok(false));

    assert!(!delete_saved(&store, &prompter, "Weekly", false).unwrap());
    assert!(
        create_store(&config)
            .get_state()
            .saved_lists
            .contains_key("Weekly")
    );
}

#[test]
fn delete_with_yes_skips_prompt() {
    let (_dir, config) = setup();
    seed_weekly(&config);
    let store = create_store(&config);

    let mut prompter = MockPrompter::new();
    prompter.expect_confirm().never();

    assert!(delete_saved(&store, &prompter, "Weekly", true).unwrap());
}

#[test]
fn delete_unknown_list_errors() {
    let (_dir, config) = setup();
    let store = create_store(&config);

    let prompter = MockPrompter::new();

    assert!(delete_saved(&store, &prompter, "Weekly", true).is_err());
}
