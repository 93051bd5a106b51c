//! Action types for state transitions.

use crate::{edit::EditBuffer, item::FieldValue};

/// Commands that trigger state changes via the reducer.
///
/// Actions gated behind a user confirmation carry the already resolved
/// decision in `confirmed`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Appends an item. Ignored when the name is blank
    AddItem {
        /// Item label
        name: String,
        /// Defaults to `1` when absent or blank
        quantity: Option<FieldValue>,
        /// Defaults to `0` when absent or blank
        amount: Option<FieldValue>,
    },
    /// Removes the item at index
    RemoveItem {
        /// Position of the item to remove
        index: usize,
        /// Whether the user agreed to the removal
        confirmed: bool,
    },
    /// Empties the active list
    ClearList {
        /// Whether the user agreed to clearing the list
        confirmed: bool,
    },
    /// Starts editing the item at index
    BeginEdit(usize),
    /// Replaces the working copy of the item being edited
    UpdateEditBuffer(EditBuffer),
    /// Writes the working copy back into the item at index
    CommitEdit(usize),
    /// Snapshots the active list under a name. Aborted when the name is
    /// absent or blank
    SaveNamed(Option<String>),
    /// Replaces the active list with a saved snapshot
    LoadNamed(String),
    /// Deletes a saved snapshot
    DeleteNamed {
        /// Name of the saved list
        name: String,
        /// Whether the user agreed to the deletion
        confirmed: bool,
    },
}

impl Action {
    /// Convenience constructor for [`Action::AddItem`].
    pub fn add(
        name: impl Into<String>,
        quantity: Option<FieldValue>,
        amount: Option<FieldValue>,
    ) -> Self {
        Self::AddItem {
            name: name.into(),
            quantity,
            amount,
        }
    }
}
