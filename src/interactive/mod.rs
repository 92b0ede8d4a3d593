//! Interactive cookbook selection.
//!
//! The [`Workflow`] walks the user from a cookbook list to a written
//! configuration file. Prompts, logging and console output are passed in so
//! the workflow can run against a real terminal or a script.

mod console;
mod log;
mod prompt;
mod workflow;

pub use console::Console;
pub use log::{ActivityLog, MemoryLog, Severity, TracingLog};
pub use prompt::{PromptOutcome, Prompter, TerminalPrompter};
pub use workflow::{RunOutcome, Workflow};
