//! Plain text rendering of shopping lists for display and sharing

use crate::item::LineItem;

/// Heading placed at the top of a shared list
pub const LIST_HEADING: &str = "My Shopping List";

/// Notice shown in place of items when a list is empty
pub const EMPTY_LIST_NOTICE: &str =
    "Your shopping list is empty. Add items to get started!";

/// Formats an aggregated amount for display. Whole numbers are rendered
/// without a fractional part
///
/// # Examples
///
/// ```
/// # use r_cartlib::summary::format_amount;
/// assert_eq!(format_amount(800.0), "800");
/// assert_eq!(format_amount(12.5), "12.5");
/// ```
pub fn format_amount(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // avoid rendering negative zero as "-0"
    if amount == 0.0 {
        return "0".to_string();
    }

    amount.to_string()
}

/// Renders a single numbered line for an item using its display position
pub fn format_item_line(position: usize, item: &LineItem, currency: &str) -> String {
    format!(
        "{}. {} - {} - {}{}",
        position + 1,
        item.name,
        item.quantity,
        currency,
        item.amount
    )
}

/// Renders the list and its total as a message suitable for sending to a
/// messaging or mail target
pub fn share_message(items: &[LineItem], total: f64, currency: &str) -> String {
    let mut lines = vec![LIST_HEADING.to_string()];

    if items.is_empty() {
        lines.push(EMPTY_LIST_NOTICE.to_string());
    } else {
        lines.extend(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| format_item_line(i, item, currency)),
        );
    }

    lines.push(format!("Total: {}{}", currency, format_amount(total)));
    lines.join("\n")
}

#[cfg(test)]
#[path = "./summary_tests.rs"]
mod tests;
