//! Parses lines typed into the interactive shell.

use color_eyre::eyre::{Result, eyre};

/// Item fields given inline as `add name | quantity | amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddArgs {
    pub name: String,
    pub quantity: Option<String>,
    pub amount: Option<String>,
}

/// A single shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add an item. Prompts for the fields when none were given.
    Add(Option<AddArgs>),
    /// Remove the item with this 1 based serial number
    Remove(usize),
    /// Edit the item with this 1 based serial number
    Edit(usize),
    Clear,
    Total,
    Show,
    /// Save the active list. Prompts for a name when none was given.
    Save(Option<String>),
    Load(String),
    Delete(String),
    Lists,
    Share,
    Help,
    Quit,
    /// Blank line
    Empty,
}

pub const HELP: &str = "\
commands:
  add [name | quantity | amount]  add an item (prompts when no fields given)
  rm <sn>                         remove an item
  edit <sn>                       edit an item
  clear                           remove every item
  total                           print the total amount
  show                            print the active list
  save [name]                     save the active list under a name
  load <name>                     replace the active list with a saved list
  delete <name>                   delete a saved list
  lists                           print saved lists
  share                           print the list as a shareable message
  help                            print this help
  quit                            leave the shell";

/// Parses a shell line into a [`Command`].
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    match keyword.to_lowercase().as_str() {
        "add" | "a" => Ok(Command::Add(parse_add(rest))),
        "rm" | "remove" => Ok(Command::Remove(parse_sn(keyword, rest)?)),
        "edit" | "e" => Ok(Command::Edit(parse_sn(keyword, rest)?)),
        "clear" => Ok(Command::Clear),
        "total" => Ok(Command::Total),
        "show" | "ls" => Ok(Command::Show),
        "save" => Ok(Command::Save(non_empty(rest))),
        "load" => Ok(Command::Load(required_name(keyword, rest)?)),
        "delete" | "del" => Ok(Command::Delete(required_name(keyword, rest)?)),
        "lists" => Ok(Command::Lists),
        "share" => Ok(Command::Share),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(eyre!("unknown command \"{keyword}\", type help for usage")),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn parse_add(rest: &str) -> Option<AddArgs> {
    if rest.is_empty() {
        return None;
    }

    let mut fields = rest.splitn(3, '|').map(str::trim);

    Some(AddArgs {
        name: fields.next().unwrap_or_default().to_string(),
        quantity: fields.next().and_then(non_empty),
        amount: fields.next().and_then(non_empty),
    })
}

fn parse_sn(keyword: &str, rest: &str) -> Result<usize> {
    match rest.parse::<usize>() {
        Ok(sn) if sn > 0 => Ok(sn),
        _ => Err(eyre!("usage: {keyword} <sn>, where sn is a serial number from the list")),
    }
}

fn required_name(keyword: &str, rest: &str) -> Result<String> {
    non_empty(rest).ok_or(eyre!("usage: {keyword} <name>"))
}

#[cfg(test)]
#[path = "./command_tests.rs"]
mod tests;
