//! Shopping list state definitions.

use crate::{edit::EditState, item::LineItem, storage::SavedLists};

/// Complete state of a shopping list session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// The active list in display order
    pub items: Vec<LineItem>,
    /// Sum of coerced amounts across `items`, recomputed on every change
    pub total_amount: f64,
    /// The single in-progress edit, if any
    pub edit: EditState,
    /// Snapshots saved by name
    pub saved_lists: SavedLists,
    /// Name of the saved list most recently loaded or saved
    pub current_list: Option<String>,
}

impl State {
    /// Creates an empty active list alongside previously saved lists.
    pub fn with_saved_lists(saved_lists: SavedLists) -> Self {
        Self {
            saved_lists,
            ..Self::default()
        }
    }

    /// Returns the total amount of the active list.
    pub fn total(&self) -> f64 {
        self.total_amount
    }

    /// Returns true when the active list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the item being edited.
    pub fn editing_index(&self) -> Option<usize> {
        self.edit.index()
    }

    /// Returns saved list names in sorted order.
    pub fn saved_list_names(&self) -> Vec<&str> {
        self.saved_lists.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
