use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

use crate::error::{CliError, Result};

/// The selection capability the orchestrator calls. Injected so the run
/// sequencing can be exercised in tests without a terminal.
pub trait Prompter {
    fn select(&self, options: &[String]) -> Result<String>;
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Convert dialoguer errors into the crate error.
fn map_dialoguer_err(err: dialoguer::Error) -> CliError {
    CliError::Io(err.into())
}

pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn select(&self, options: &[String]) -> Result<String> {
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a language")
            .items(options)
            .default(0)
            .interact()
            .map_err(map_dialoguer_err)?;
        Ok(options[index].clone())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(map_dialoguer_err)
    }
}
