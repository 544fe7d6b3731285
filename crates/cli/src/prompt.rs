//! Interactive prompts for the `new` command.
//!
//! This module provides functionality to:
//! - Pick a template and a file name when they are not given on the command line
//! - Ask for values of placeholders that nothing else resolves
//! - Support batch mode (non-interactive) for CI/scripting

use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use filetemplates_core::templates::{Prompter, TemplateInfo};
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, never prompt.
    pub batch_mode: bool,
}

impl PromptOptions {
    /// Prompts are shown only when stdin is a terminal and batch mode is off.
    pub fn is_interactive(&self) -> bool {
        !self.batch_mode && io::stdin().is_terminal()
    }
}

/// Error type for interactive prompts.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

/// Asks the user on the terminal for each unresolved placeholder.
///
/// Any failure to read an answer counts as no answer, so the renderer falls
/// back to the default value instead of aborting.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&mut self, name: &str) -> Option<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("Please enter the desired value for \"{name}\""))
            .allow_empty(true)
            .interact_text()
            .map_err(dialoguer_error_to_prompt_error)
            .ok()
            .filter(|v| !v.is_empty())
    }
}

/// Let the user pick a template. `Ok(None)` means the picker was dismissed.
pub fn select_template(templates: &[TemplateInfo]) -> Result<Option<&TemplateInfo>, PromptError> {
    let names: Vec<&str> = templates.iter().map(|t| t.logical_name.as_str()).collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a template")
        .items(&names)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)?;

    Ok(selection.map(|idx| &templates[idx]))
}

/// Ask for the name of the file to create, pre-filled with `suggested`.
///
/// An empty answer is reported as [`PromptError::Cancelled`].
pub fn ask_filename(suggested: &str) -> Result<String, PromptError> {
    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Please enter the desired file name")
        .with_initial_text(suggested)
        .allow_empty(true)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;

    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(PromptError::Cancelled);
    }
    Ok(value)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof
                || io_err.kind() == io::ErrorKind::Interrupted
            {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse a `--var` argument.
///
/// Expected format: `key=value`; the value may be empty.
pub fn parse_var_arg(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid variable '{arg}': expected KEY=VALUE")),
    }
}
