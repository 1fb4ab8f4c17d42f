use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::CliError;

/// Prompt the user for free-form text input. An empty answer is allowed;
/// the step gates decide whether the field was actually required.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt the user for a yes/no answer.
pub fn prompt_flag(theme: &ColorfulTheme, prompt: &str, default: bool) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt for a comma-separated list; blank input yields an empty list.
pub fn prompt_list(theme: &ColorfulTheme, prompt: &str) -> Result<Vec<String>, CliError> {
    let raw = prompt_text(theme, &format!("{prompt} (comma-separated)"))?;
    Ok(split_list(&raw))
}

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompt for file paths one at a time; a blank answer ends the list.
/// Paths are taken verbatim, so a comma inside a path stays intact.
pub fn prompt_paths(theme: &ColorfulTheme, prompt: &str) -> Result<Vec<String>, CliError> {
    let mut paths = Vec::new();
    loop {
        let raw = prompt_text(theme, &format!("{prompt} (blank to finish)"))?;
        match normalized_path(&raw) {
            Some(path) => paths.push(path),
            None => break,
        }
    }
    Ok(paths)
}

fn normalized_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
