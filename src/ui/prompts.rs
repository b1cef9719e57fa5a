//! Interactive prompts.

use std::path::{Path, PathBuf};

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{BootError, Result};

/// Convert dialoguer errors to BootError.
fn map_dialoguer_err(e: dialoguer::Error) -> BootError {
    BootError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Accept empty input (cancel) or a path that exists.
pub fn validate_path(input: &str) -> std::result::Result<(), String> {
    if input.trim().is_empty() || Path::new(input.trim()).exists() {
        Ok(())
    } else {
        Err(format!("{} does not exist", input.trim()))
    }
}

/// Ask for a path. `None` means the user left the answer empty.
pub fn prompt_path(question: &str, default: Option<&Path>, term: &Term) -> Result<Option<PathBuf>> {
    let theme = prompt_theme();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(question)
        .allow_empty(true)
        .validate_with(|s: &String| validate_path(s));

    if let Some(default) = default {
        input = input.default(default.to_string_lossy().into_owned());
    }

    let answer = input.interact_on(term).map_err(map_dialoguer_err)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}
