//! Edit state reducers.

use crate::{
    edit::{EditBuffer, EditState},
    store::state::State,
};

use super::items::recompute_total;

/// Captures the item at index into a fresh buffer, replacing any edit
/// already in progress. Out of range indexes leave the state untouched.
pub fn begin_edit(state: &mut State, index: usize) {
    if let Some(item) = state.items.get(index) {
        state.edit = EditState::Editing {
            index,
            buffer: EditBuffer::from(item),
        };
    }
}

/// Replaces the working copy while editing.
pub fn update_edit_buffer(state: &mut State, buffer: EditBuffer) {
    if let EditState::Editing { buffer: current, .. } = &mut state.edit {
        *current = buffer;
    }
}

/// Merges the working copy into the item being edited and returns to idle.
pub fn commit_edit(state: &mut State, index: usize) {
    match std::mem::take(&mut state.edit) {
        EditState::Editing {
            index: editing,
            buffer,
        } if editing == index => {
            if let Some(item) = state.items.get_mut(index) {
                buffer.merge_into(item);
            }
            recompute_total(state);
        }
        other => state.edit = other,
    }
}
