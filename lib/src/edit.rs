//! Edit state for the single line item that may be edited at a time

use crate::item::{FieldValue, LineItem};

/// Working copy of the editable fields of a line item
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    /// Working copy of the item name
    pub name: String,
    /// Working copy of the item quantity
    pub quantity: FieldValue,
    /// Working copy of the item amount
    pub amount: FieldValue,
}

impl EditBuffer {
    /// Overwrites the editable fields of the item leaving all other fields
    /// untouched
    pub fn merge_into(self, item: &mut LineItem) {
        item.name = self.name;
        item.quantity = self.quantity;
        item.amount = self.amount;
    }
}

impl From<&LineItem> for EditBuffer {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            amount: item.amount.clone(),
        }
    }
}

/// At most one item is editable at any time
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    /// No edit in progress
    #[default]
    Idle,
    /// The item at `index` is being edited
    Editing {
        /// Position of the item being edited
        index: usize,
        /// Working copy of the item's editable fields
        buffer: EditBuffer,
    },
}

impl EditState {
    /// Returns the index of the item being edited, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Editing { index, .. } => Some(*index),
        }
    }

    /// Returns the working copy of the item being edited, if any
    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            Self::Idle => None,
            Self::Editing { buffer, .. } => Some(buffer),
        }
    }
}
