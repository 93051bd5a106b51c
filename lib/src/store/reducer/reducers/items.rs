//! Active list reducers.

use crate::{
    edit::EditState,
    item::{FieldValue, LineItem, total_amount},
    store::state::State,
};

/// Recomputes the cached total from the current items.
pub fn recompute_total(state: &mut State) {
    state.total_amount = total_amount(&state.items);
}

/// Appends a new item unless the name is blank.
pub fn add_item(
    state: &mut State,
    name: String,
    quantity: Option<FieldValue>,
    amount: Option<FieldValue>,
) {
    if name.trim().is_empty() {
        return;
    }

    let sn = state.items.len();
    state.items.push(LineItem::new(sn, name, quantity, amount));
    recompute_total(state);
}

/// Removes the item at index, shifting later items down by one.
pub fn remove_item(state: &mut State, index: usize, confirmed: bool) {
    if !confirmed || index >= state.items.len() {
        return;
    }

    state.items.remove(index);
    state.edit = EditState::Idle;
    recompute_total(state);
}

/// Replaces the active list with an empty one.
pub fn clear_list(state: &mut State, confirmed: bool) {
    if !confirmed {
        return;
    }

    state.items.clear();
    state.edit = EditState::Idle;
    recompute_total(state);
}
