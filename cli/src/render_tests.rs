use serde_json::Value;

use super::*;

fn items() -> Vec<LineItem> {
    vec![
        LineItem::new(0, "Rice", Some("Derica".into()), Some(500.into())),
        LineItem::new(1, "Milk", Some("2".into()), Some("300".into())),
    ]
}

#[test]
fn test_render_items_table_and_total() {
    let out = render_items("My Shopping List", &items(), 800.0, "₦");

    assert!(out.starts_with("My Shopping List\n"));
    assert!(out.contains("SN"));
    assert!(out.contains("QUANTITY"));
    assert!(out.contains("Derica"));
    assert!(out.contains("₦500"));
    assert!(out.contains("₦300"));
    assert!(out.ends_with("Total Amount: ₦800"));
}

#[test]
fn test_render_items_empty_list() {
    let out = render_items("My Shopping List", &[], 0.0, "₦");

    assert_eq!(
        out,
        "My Shopping List\nYour shopping list is empty. Add items to get started!"
    );
}

#[test]
fn test_render_saved_lists() {
    let mut lists = SavedLists::new();
    lists.insert("Weekly".to_string(), items());
    lists.insert("Party".to_string(), vec![]);

    let out = render_saved_lists(&lists, "$");

    assert!(out.contains("Weekly"));
    assert!(out.contains("$800"));
    assert!(out.contains("Party"));
    assert!(out.contains("$0"));
    assert!(out.find("Party").unwrap() < out.find("Weekly").unwrap());
}

#[test]
fn test_render_saved_lists_empty() {
    assert_eq!(render_saved_lists(&SavedLists::new(), "₦"), "No saved lists");
}

#[test]
fn test_items_json_includes_total() {
    let json: Value =
        serde_json::from_str(&items_json("Weekly", &items()).unwrap()).unwrap();

    assert_eq!(json["name"], "Weekly");
    assert_eq!(json["total"], 800.0);
    assert_eq!(json["items"][0]["quantity"], "Derica");
    assert_eq!(json["items"][0]["amount"], 500);
    assert_eq!(json["items"][1]["amount"], "300");
}

#[test]
fn test_saved_lists_json() {
    let mut lists = SavedLists::new();
    lists.insert("Weekly".to_string(), items());

    let json: Value =
        serde_json::from_str(&saved_lists_json(&lists).unwrap()).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Weekly");
    assert_eq!(json[0]["items"].as_array().unwrap().len(), 2);
}
