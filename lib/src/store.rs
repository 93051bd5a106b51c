//! Redux-like state container for a shopping list session.
//!
//! All mutations flow through [`Dispatcher::dispatch`]. The reducer computes
//! the new state and reports any [`effect::Effect`] which the store then
//! executes against its [`ListStorage`]. Storage failures are logged and
//! swallowed since there is no recovery path for the user.

#[cfg(test)]
use mockall::automock;

use std::{cell::RefCell, rc::Rc};

use crate::{
    storage::{ListStorage, SavedLists},
    store::{action::Action, effect::Effect, state::State},
};

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter {
    /// Returns a snapshot of the current state
    fn get_state(&self) -> Rc<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher {
    /// Applies action to the current state
    fn dispatch(&self, action: Action);
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    /// Mutates state in place returning any side effect to execute
    fn reduce(&self, state: &mut State, action: Action) -> Effect;
}

/// Centralized state container
pub struct Store {
    state: RefCell<Rc<State>>,
    reducer: Box<dyn Reducer>,
    storage: Box<dyn ListStorage>,
}

impl Store {
    /// Creates a new store, reading saved lists from storage once. A storage
    /// read failure starts the session with no saved lists.
    pub fn new(reducer: Box<dyn Reducer>, storage: Box<dyn ListStorage>) -> Self {
        let saved_lists = storage.load().unwrap_or_else(|e| {
            log::warn!("failed to load saved lists, starting empty: {e}");
            SavedLists::new()
        });

        log::debug!("loaded {} saved lists", saved_lists.len());

        Self {
            state: RefCell::new(Rc::new(State::with_saved_lists(saved_lists))),
            reducer,
            storage,
        }
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::PersistSavedLists => {
                let state = self.get_state();
                if let Err(e) = self.storage.save(&state.saved_lists) {
                    log::warn!("failed to persist saved lists: {e}");
                }
            }
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        let effect = {
            let mut rc = self.state.borrow_mut();
            let state = Rc::make_mut(&mut rc);
            self.reducer.reduce(state, action)
        };

        self.execute(effect);
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
