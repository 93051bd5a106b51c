//! Interactive prompts used to resolve confirmations and item input.

#[cfg(test)]
use mockall::automock;

use color_eyre::eyre::Result;
use std::{
    cell::RefCell,
    io::{self, BufRead, StdinLock, Stdout, Write},
};

/// Asks the user questions. Confirmation-gated store actions are resolved
/// through this before they are dispatched.
#[cfg_attr(test, automock)]
pub trait Prompter {
    /// Asks a yes / no question. Anything other than "y" or "yes" declines.
    fn confirm(&self, message: &str) -> Result<bool>;
    /// Reads a single line of input. Returns None when input is closed.
    fn input(&self, prompt: &str) -> Result<Option<String>>;
    /// Reads a single line of input, returning `default` for an empty line.
    fn input_with_default(&self, message: &str, default: &str) -> Result<String>;
}

/// Line based prompter over any reader and writer pair.
pub struct TermPrompter<R: BufRead, W: Write> {
    reader: RefCell<R>,
    writer: RefCell<W>,
}

impl TermPrompter<StdinLock<'static>, Stdout> {
    /// Prompts on stdout and reads answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TermPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
        }
    }

    fn ask(&self, prompt: &str) -> Result<Option<String>> {
        {
            let mut writer = self.writer.borrow_mut();
            write!(writer, "{prompt}")?;
            writer.flush()?;
        }

        let mut line = String::new();
        let read = self.reader.borrow_mut().read_line(&mut line)?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

impl<R: BufRead, W: Write> Prompter for TermPrompter<R, W> {
    fn confirm(&self, message: &str) -> Result<bool> {
        let answer = self.ask(&format!("{message} [y/N]: "))?;
        Ok(answer.is_some_and(|a| {
            matches!(a.trim().to_lowercase().as_str(), "y" | "yes")
        }))
    }

    fn input(&self, prompt: &str) -> Result<Option<String>> {
        self.ask(prompt)
    }

    fn input_with_default(&self, message: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{message} [{default}]: "))?;
        match answer {
            Some(a) if !a.trim().is_empty() => Ok(a),
            _ => Ok(default.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "./prompt_tests.rs"]
mod tests;
