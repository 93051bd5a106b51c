//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Returns a boxed reducer ready to hand to a [`crate::store::Store`].
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

fn persist_if(changed: bool) -> Effect {
    if changed {
        Effect::PersistSavedLists
    } else {
        Effect::None
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        match action {
            // Active list actions
            Action::AddItem {
                name,
                quantity,
                amount,
            } => {
                self.log_action("AddItem", &(&name, &quantity, &amount));
                reducers::items::add_item(state, name, quantity, amount);
                Effect::None
            }
            Action::RemoveItem { index, confirmed } => {
                self.log_action("RemoveItem", &(index, confirmed));
                reducers::items::remove_item(state, index, confirmed);
                Effect::None
            }
            Action::ClearList { confirmed } => {
                self.log_action("ClearList", &confirmed);
                reducers::items::clear_list(state, confirmed);
                Effect::None
            }

            // Edit actions
            Action::BeginEdit(index) => {
                self.log_action("BeginEdit", &index);
                reducers::edit::begin_edit(state, index);
                Effect::None
            }
            Action::UpdateEditBuffer(buffer) => {
                self.log_action("UpdateEditBuffer", &buffer);
                reducers::edit::update_edit_buffer(state, buffer);
                Effect::None
            }
            Action::CommitEdit(index) => {
                self.log_action("CommitEdit", &index);
                reducers::edit::commit_edit(state, index);
                Effect::None
            }

            // Saved list actions
            Action::SaveNamed(name) => {
                self.log_action("SaveNamed", &name);
                persist_if(reducers::saved::save_named(state, name))
            }
            Action::LoadNamed(name) => {
                self.log_action("LoadNamed", &name);
                reducers::saved::load_named(state, &name);
                Effect::None
            }
            Action::DeleteNamed { name, confirmed } => {
                self.log_action("DeleteNamed", &(&name, confirmed));
                persist_if(reducers::saved::delete_named(
                    state, &name, confirmed,
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
