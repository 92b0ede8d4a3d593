//! Prompt abstraction over the terminal.
//!
//! The workflow only talks to [`Prompter`]; [`TerminalPrompter`] is the
//! dialoguer-backed implementation used by the binary.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

/// Result of showing a prompt.
///
/// Interrupting a prompt is an expected user action, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    /// The user answered.
    Answered(T),
    /// The user interrupted the prompt (Ctrl-C, end of input, Esc).
    Cancelled,
}

impl<T> PromptOutcome<T> {
    /// The answer, if there was one.
    pub fn answered(self) -> Option<T> {
        match self {
            Self::Answered(value) => Some(value),
            Self::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Source of user decisions.
pub trait Prompter {
    /// Let the user pick one of `items`; returns the chosen index.
    fn select(&mut self, message: &str, items: &[String]) -> io::Result<PromptOutcome<usize>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<PromptOutcome<bool>>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, message: &str, items: &[String]) -> io::Result<PromptOutcome<usize>> {
        (**self).select(message, items)
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<PromptOutcome<bool>> {
        (**self).confirm(message, default)
    }
}

/// Interactive prompts rendered with dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, items: &[String]) -> io::Result<PromptOutcome<usize>> {
        let result = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(0)
            .interact_opt();

        match result {
            Ok(Some(index)) => Ok(PromptOutcome::Answered(index)),
            Ok(None) => Ok(PromptOutcome::Cancelled),
            Err(e) => from_dialoguer(e),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> io::Result<PromptOutcome<bool>> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_opt();

        match result {
            Ok(Some(answer)) => Ok(PromptOutcome::Answered(answer)),
            Ok(None) => Ok(PromptOutcome::Cancelled),
            Err(e) => from_dialoguer(e),
        }
    }
}

fn from_dialoguer<T>(err: dialoguer::Error) -> io::Result<PromptOutcome<T>> {
    match err {
        dialoguer::Error::IO(e) => cancelled_or_err(e),
    }
}

/// Interrupt and end-of-input become [`PromptOutcome::Cancelled`]; anything
/// else is a real IO failure.
pub(crate) fn cancelled_or_err<T>(err: io::Error) -> io::Result<PromptOutcome<T>> {
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => {
            tracing::debug!(error = %err, "prompt interrupted");
            Ok(PromptOutcome::Cancelled)
        }
        _ => Err(err),
    }
}
