//! The interactive cookbook workflow.
//!
//! Five steps, strictly in order: list cookbooks, pick one, pick an output
//! location, confirm, copy. Every negative answer ends the run early with a
//! notice; only IO failures surface as errors.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::console::Console;
use super::log::ActivityLog;
use super::prompt::{PromptOutcome, Prompter};
use crate::core::{location_labels, path_from_label, Repository};
use crate::error::MicooError;

const CANCELLED_MESSAGE: &str = "Prompt cancelled by user.";
const NO_LOCATION_MESSAGE: &str = "No output location selected. Exiting.";

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The repository has no cookbooks.
    NoCookbooks,
    /// The user backed out of the cookbook prompt.
    SelectionCancelled,
    /// The user backed out of the output location prompt.
    NoOutputLocation,
    /// The user answered "no" (or backed out) at confirmation.
    ConfirmationDeclined,
    /// The chosen cookbook disappeared before it could be copied.
    CookbookNotFound(String),
    /// The cookbook was written.
    Generated { cookbook: String, output: PathBuf },
}

impl RunOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// Drives one interactive run.
pub struct Workflow<'a, P, L, W>
where
    P: Prompter,
    L: ActivityLog,
    W: Write,
{
    repository: &'a Repository,
    prompter: P,
    log: L,
    console: Console<W>,
    base_dir: PathBuf,
}

impl<'a, P, L, W> Workflow<'a, P, L, W>
where
    P: Prompter,
    L: ActivityLog,
    W: Write,
{
    /// Output paths resolve against the current directory unless
    /// [`with_base_dir`](Self::with_base_dir) says otherwise.
    pub fn new(repository: &'a Repository, prompter: P, log: L, out: W) -> Self {
        Self { repository, prompter, log, console: Console::new(out), base_dir: PathBuf::new() }
    }

    /// Resolve relative output paths against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Cookbook names available in the repository.
    pub fn list_cookbooks(&self) -> Vec<String> {
        self.repository.list()
    }

    /// Ask the user for a cookbook. `None` when there is nothing to pick or
    /// the user backed out.
    pub fn select_cookbook(&mut self, names: &[String]) -> Result<Option<String>> {
        if names.is_empty() {
            self.console.error(&format!(
                "No cookbooks available in {}.",
                self.repository.root().display()
            ))?;
            return Ok(None);
        }

        let outcome = self
            .prompter
            .select("Select a cookbook", names)
            .context("Cookbook prompt failed")?;

        match outcome {
            PromptOutcome::Answered(index) => Ok(names.get(index).cloned()),
            PromptOutcome::Cancelled => {
                self.cancelled()?;
                Ok(None)
            }
        }
    }

    /// Ask the user where to write the cookbook. Returns the relative path.
    pub fn select_output_location(&mut self) -> Result<Option<String>> {
        let labels = location_labels();
        let outcome = self
            .prompter
            .select("Select output file location", &labels)
            .context("Output location prompt failed")?;

        let selected = outcome.answered().and_then(|index| labels.get(index));
        match selected {
            Some(label) => Ok(Some(path_from_label(label).to_string())),
            None => {
                self.console.notice(NO_LOCATION_MESSAGE)?;
                self.log.info(NO_LOCATION_MESSAGE);
                Ok(None)
            }
        }
    }

    /// Ask the user to confirm. Backing out counts as "no".
    pub fn confirm(&mut self, cookbook: &str, output: &str) -> Result<bool> {
        let message = format!("Generate {cookbook} cookbook to {output}?");
        let outcome =
            self.prompter.confirm(&message, true).context("Confirmation prompt failed")?;

        match outcome {
            PromptOutcome::Answered(answer) => Ok(answer),
            PromptOutcome::Cancelled => {
                self.cancelled()?;
                Ok(false)
            }
        }
    }

    /// Copy the cookbook to `output`.
    ///
    /// A missing cookbook is reported and returns `false`; IO failures while
    /// reading or writing are errors.
    pub fn generate(&mut self, cookbook: &str, output: &str) -> Result<bool> {
        let resolved = match self.repository.find(cookbook) {
            Ok(resolved) => resolved,
            Err(e @ (MicooError::CookbookNotFound { .. } | MicooError::InvalidCookbookName(_))) => {
                self.console.error(&format!("Cookbook '{cookbook}' not found."))?;
                self.log.error(&e.to_string());
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let dest = self.destination(output);
        let bytes = resolved
            .write_to(&dest)
            .with_context(|| format!("Failed to generate {cookbook} cookbook"))?;
        tracing::debug!(cookbook, dest = %dest.display(), bytes, "cookbook written");

        Ok(true)
    }

    /// Run the whole workflow.
    pub fn run(&mut self) -> Result<RunOutcome> {
        self.log.info("Starting interactive mode");
        self.console.welcome()?;

        let cookbooks = self.list_cookbooks();
        if cookbooks.is_empty() {
            self.console.error(&format!(
                "No cookbooks found in {}.",
                self.repository.root().display()
            ))?;
            return Ok(RunOutcome::NoCookbooks);
        }

        let Some(cookbook) = self.select_cookbook(&cookbooks)? else {
            self.console.notice("No cookbook selected. Exiting.")?;
            return Ok(RunOutcome::SelectionCancelled);
        };
        self.log.info(&format!("Cookbook '{cookbook}' selected"));

        let Some(output) = self.select_output_location()? else {
            return Ok(RunOutcome::NoOutputLocation);
        };

        if !self.confirm(&cookbook, &output)? {
            self.console.notice("Action cancelled.")?;
            return Ok(RunOutcome::ConfirmationDeclined);
        }

        if !self.generate(&cookbook, &output)? {
            self.console.error("Failed to generate cookbook.")?;
            return Ok(RunOutcome::CookbookNotFound(cookbook));
        }

        self.console.success(&cookbook, &output)?;
        self.log.info(&format!("Successfully generated {cookbook} cookbook to {output}"));
        self.log.info("Interactive mode completed");

        Ok(RunOutcome::Generated { cookbook, output: self.destination(&output) })
    }

    fn destination(&self, output: &str) -> PathBuf {
        self.base_dir.join(output)
    }

    fn cancelled(&mut self) -> Result<()> {
        self.console.notice(CANCELLED_MESSAGE)?;
        self.log.info(CANCELLED_MESSAGE);
        Ok(())
    }
}
