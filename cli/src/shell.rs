//! Interactive shell session over a single shopping list store.
//!
//! The active list lives for as long as the session does. Only saved lists
//! are persisted, and every confirmation-gated action is resolved through the
//! [`Prompter`] before it reaches the store.

use color_eyre::eyre::Result;
use log::*;
use r_cartlib::{
    edit::EditBuffer,
    item::FieldValue,
    store::{Dispatcher, StateGetter, Store, action::Action, state::State},
    summary::{LIST_HEADING, format_amount, share_message},
};
use std::rc::Rc;

use crate::{
    command::{self, AddArgs, Command, HELP},
    prompt::Prompter,
    render,
};

pub const PROMPT: &str = "r-cart> ";
pub const REMOVE_ITEM_PROMPT: &str =
    "Are you sure you want to remove this item?";
pub const CLEAR_LIST_PROMPT: &str =
    "Are you sure you want to clear the entire list?";
pub const LIST_NAME_PROMPT: &str = "Enter a name for this list: ";

/// What the shell does after running a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print this text and keep reading commands
    Output(String),
    /// Keep reading commands
    Silent,
    /// Leave the shell
    Exit,
}

pub fn delete_list_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"?")
}

/// Interactive session owning the store and the prompter used to talk to the
/// user.
pub struct Shell {
    store: Store,
    prompter: Box<dyn Prompter>,
    currency: String,
}

impl Shell {
    pub fn new(
        store: Store,
        prompter: Box<dyn Prompter>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            store,
            prompter,
            currency: currency.into(),
        }
    }

    /// Current store state.
    pub fn state(&self) -> Rc<State> {
        self.store.get_state()
    }

    /// Reads and executes commands until quit or closed input.
    pub fn run(&self) -> Result<()> {
        println!("{}", self.render_active());
        println!("type help for a list of commands");

        while let Some(line) = self.prompter.input(PROMPT)? {
            match self.execute(&line) {
                Ok(Reply::Output(text)) => println!("{text}"),
                Ok(Reply::Silent) => {}
                Ok(Reply::Exit) => break,
                Err(e) => println!("{e}"),
            }
        }

        Ok(())
    }

    /// Parses and executes a single shell line.
    pub fn execute(&self, line: &str) -> Result<Reply> {
        let command = command::parse(line)?;
        debug!("executing shell command: {:?}", command);

        match command {
            Command::Empty => Ok(Reply::Silent),
            Command::Add(args) => self.add(args),
            Command::Remove(sn) => self.remove(sn),
            Command::Edit(sn) => self.edit(sn),
            Command::Clear => self.clear(),
            Command::Total => Ok(Reply::Output(format!(
                "Total Amount: {}{}",
                self.currency,
                format_amount(self.state().total())
            ))),
            Command::Show => Ok(Reply::Output(self.render_active())),
            Command::Save(name) => self.save(name),
            Command::Load(name) => self.load(name),
            Command::Delete(name) => self.delete(name),
            Command::Lists => Ok(Reply::Output(render::render_saved_lists(
                &self.state().saved_lists,
                &self.currency,
            ))),
            Command::Share => {
                let state = self.state();
                Ok(Reply::Output(share_message(
                    &state.items,
                    state.total(),
                    &self.currency,
                )))
            }
            Command::Help => Ok(Reply::Output(HELP.to_string())),
            Command::Quit => Ok(Reply::Exit),
        }
    }

    fn render_active(&self) -> String {
        let state = self.state();
        let heading = match &state.current_list {
            Some(name) => format!("{LIST_HEADING} ({name})"),
            None => LIST_HEADING.to_string(),
        };
        render::render_items(&heading, &state.items, state.total(), &self.currency)
    }

    fn item_exists(&self, sn: usize) -> bool {
        (1..=self.state().items.len()).contains(&sn)
    }

    fn add(&self, args: Option<AddArgs>) -> Result<Reply> {
        let args = match args {
            Some(args) => args,
            None => {
                let Some(name) = self.prompter.input("Item name: ")? else {
                    return Ok(Reply::Silent);
                };
                AddArgs {
                    name,
                    quantity: self.prompter.input("Quantity: ")?,
                    amount: self.prompter.input("Amount: ")?,
                }
            }
        };

        if args.name.trim().is_empty() {
            return Ok(Reply::Output("item name is required".to_string()));
        }

        self.store.dispatch(Action::AddItem {
            name: args.name,
            quantity: args.quantity.map(FieldValue::from),
            amount: args.amount.map(FieldValue::from),
        });

        Ok(Reply::Output(self.render_active()))
    }

    fn remove(&self, sn: usize) -> Result<Reply> {
        if !self.item_exists(sn) {
            return Ok(Reply::Output(format!("no item with sn {sn}")));
        }

        let confirmed = self.prompter.confirm(REMOVE_ITEM_PROMPT)?;
        self.store.dispatch(Action::RemoveItem {
            index: sn - 1,
            confirmed,
        });

        Ok(Reply::Output(self.render_active()))
    }

    fn edit(&self, sn: usize) -> Result<Reply> {
        if !self.item_exists(sn) {
            return Ok(Reply::Output(format!("no item with sn {sn}")));
        }

        let index = sn - 1;
        self.store.dispatch(Action::BeginEdit(index));

        let state = self.state();
        let Some(current) = state.edit.buffer() else {
            return Ok(Reply::Output(format!("no item with sn {sn}")));
        };

        let name = self.prompter.input_with_default("Name", &current.name)?;
        let quantity = self
            .prompter
            .input_with_default("Quantity", &current.quantity.to_string())?;
        let amount = self
            .prompter
            .input_with_default("Amount", &current.amount.to_string())?;

        self.store.dispatch(Action::UpdateEditBuffer(EditBuffer {
            name,
            quantity: edited_field(&current.quantity, quantity),
            amount: edited_field(&current.amount, amount),
        }));
        self.store.dispatch(Action::CommitEdit(index));

        Ok(Reply::Output(self.render_active()))
    }

    fn clear(&self) -> Result<Reply> {
        if self.state().is_empty() {
            return Ok(Reply::Output(self.render_active()));
        }

        let confirmed = self.prompter.confirm(CLEAR_LIST_PROMPT)?;
        self.store.dispatch(Action::ClearList { confirmed });

        Ok(Reply::Output(self.render_active()))
    }

    fn save(&self, name: Option<String>) -> Result<Reply> {
        let name = match name {
            Some(name) => Some(name),
            None => self.prompter.input(LIST_NAME_PROMPT)?,
        };

        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Ok(Reply::Output("save cancelled".to_string()));
        };

        self.store.dispatch(Action::SaveNamed(Some(name.clone())));

        Ok(Reply::Output(format!("saved \"{}\"", name.trim())))
    }

    fn load(&self, name: String) -> Result<Reply> {
        let found = self.state().saved_lists.contains_key(&name);
        self.store.dispatch(Action::LoadNamed(name.clone()));

        if !found {
            return Ok(Reply::Output(format!(
                "no saved list named \"{name}\", starting an empty list"
            )));
        }

        Ok(Reply::Output(self.render_active()))
    }

    fn delete(&self, name: String) -> Result<Reply> {
        if !self.state().saved_lists.contains_key(&name) {
            return Ok(Reply::Output(format!("no saved list named \"{name}\"")));
        }

        let confirmed = self.prompter.confirm(&delete_list_prompt(&name))?;
        self.store.dispatch(Action::DeleteNamed {
            name: name.clone(),
            confirmed,
        });

        if confirmed {
            Ok(Reply::Output(format!("deleted \"{name}\"")))
        } else {
            Ok(Reply::Silent)
        }
    }
}

/// Keeps the current value when the user accepted it unchanged so numbers
/// stay numbers.
fn edited_field(current: &FieldValue, input: String) -> FieldValue {
    if input == current.to_string() {
        current.clone()
    } else {
        FieldValue::Text(input)
    }
}

#[cfg(test)]
#[path = "./shell_tests.rs"]
mod tests;
