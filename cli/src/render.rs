//! Table and JSON rendering for the active list and saved lists.

use color_eyre::eyre::Result;
use prettytable::{Table, row};
use r_cartlib::{
    item::{LineItem, total_amount},
    storage::SavedLists,
    summary::{EMPTY_LIST_NOTICE, format_amount},
};
use serde::Serialize;

#[doc(hidden)]
fn items_table(items: &[LineItem], currency: &str) -> Table {
    let mut table = Table::new();

    table.add_row(row!["SN", "NAME", "QUANTITY", "AMOUNT"]);

    for (i, item) in items.iter().enumerate() {
        let sn = i + 1;
        let amount = format!("{}{}", currency, item.amount);
        table.add_row(row![sn, item.name, item.quantity, amount]);
    }

    table
}

/// Renders a list as a table followed by its total. An empty list renders
/// the empty notice instead of a table.
pub fn render_items(
    heading: &str,
    items: &[LineItem],
    total: f64,
    currency: &str,
) -> String {
    if items.is_empty() {
        return format!("{heading}\n{EMPTY_LIST_NOTICE}");
    }

    format!(
        "{heading}\n{}Total Amount: {}{}",
        items_table(items, currency),
        currency,
        format_amount(total)
    )
}

/// Renders saved list names with their item counts and totals.
pub fn render_saved_lists(lists: &SavedLists, currency: &str) -> String {
    if lists.is_empty() {
        return "No saved lists".to_string();
    }

    let mut table = Table::new();

    table.add_row(row!["NAME", "ITEMS", "TOTAL"]);

    for (name, items) in lists {
        let count = items.len();
        let total =
            format!("{}{}", currency, format_amount(total_amount(items)));
        table.add_row(row![name, count, total]);
    }

    table.to_string()
}

#[derive(Serialize)]
struct ListReport<'a> {
    name: &'a str,
    items: &'a [LineItem],
    total: f64,
}

/// Serializes a named list with its computed total.
pub fn items_json(name: &str, items: &[LineItem]) -> Result<String> {
    let report = ListReport {
        name,
        items,
        total: total_amount(items),
    };
    Ok(serde_json::to_string(&report)?)
}

/// Serializes every saved list with its computed total.
pub fn saved_lists_json(lists: &SavedLists) -> Result<String> {
    let reports: Vec<ListReport> = lists
        .iter()
        .map(|(name, items)| ListReport {
            name,
            items,
            total: total_amount(items),
        })
        .collect();
    Ok(serde_json::to_string(&reports)?)
}

#[cfg(test)]
#[path = "./render_tests.rs"]
mod tests;
