//! Saved list reducers. Each returns true when the saved list mapping changed
//! and needs persisting.

use crate::{edit::EditState, store::state::State};

use super::items::recompute_total;

/// Snapshots the active list under name, overwriting any list of the same
/// name.
pub fn save_named(state: &mut State, name: Option<String>) -> bool {
    let Some(name) = name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
    else {
        return false;
    };

    state.saved_lists.insert(name.clone(), state.items.clone());
    state.current_list = Some(name);
    true
}

/// Replaces the active list with the snapshot saved under name, or an empty
/// list when no such snapshot exists.
pub fn load_named(state: &mut State, name: &str) {
    match state.saved_lists.get(name) {
        Some(items) => {
            state.items = items.clone();
            state.current_list = Some(name.to_string());
        }
        None => {
            state.items = Vec::new();
            state.current_list = None;
        }
    }

    state.edit = EditState::Idle;
    recompute_total(state);
}

/// Removes the snapshot saved under name. Clears the active list as well when
/// it was loaded from that snapshot.
pub fn delete_named(state: &mut State, name: &str, confirmed: bool) -> bool {
    if !confirmed || state.saved_lists.remove(name).is_none() {
        return false;
    }

    if state.current_list.as_deref() == Some(name) {
        state.items.clear();
        state.current_list = None;
        state.edit = EditState::Idle;
        recompute_total(state);
    }

    true
}
