//! Prompt plumbing shared by every screen.
//!
//! Each prompt runs in one of two modes: `Interactive` drives a real
//! terminal through `dialoguer`, `Script` renders a plain transcript
//! and pulls replies from [`super::script`]. Screens stay identical
//! across both.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use super::output;
use super::script::{self, ScriptAnswer};
use crate::errors::CliError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptMode {
    Interactive,
    Script,
}

/// Single-choice prompt. `None` means the visitor backed out.
pub fn select(mode: PromptMode, label: &str, items: &[String]) -> Result<Option<usize>, CliError> {
    match mode {
        PromptMode::Interactive => interactive_select(label, items),
        PromptMode::Script => scripted_select(label, items),
    }
}

/// Free-text prompt. Re-asks while the reply is empty unless
/// `allow_empty` is set.
pub fn text(mode: PromptMode, label: &str, allow_empty: bool) -> Result<Option<String>, CliError> {
    match mode {
        PromptMode::Interactive => interactive_text(label, allow_empty),
        PromptMode::Script => scripted_text(label, allow_empty),
    }
}

/// Yes/no prompt. A blank scripted reply takes the default.
pub fn confirm(mode: PromptMode, label: &str, default: bool) -> Result<Option<bool>, CliError> {
    match mode {
        PromptMode::Interactive => interactive_confirm(label, default),
        PromptMode::Script => scripted_confirm(label, default),
    }
}

fn interactive_select(label: &str, items: &[String]) -> Result<Option<usize>, CliError> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

fn interactive_text(label: &str, allow_empty: bool) -> Result<Option<String>, CliError> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(Some(value.trim().to_string()))
}

fn interactive_confirm(label: &str, default: bool) -> Result<Option<bool>, CliError> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(default)
        .interact_opt()?;
    Ok(answer)
}

fn scripted_select(label: &str, items: &[String]) -> Result<Option<usize>, CliError> {
    output::prompt(label);
    for (index, item) in items.iter().enumerate() {
        println!("  {}) {}", index + 1, item);
    }
    loop {
        match script::read_reply() {
            ScriptAnswer::Cancel => return Ok(None),
            ScriptAnswer::Value(raw) => {
                if let Some(index) = match_choice(&raw, items) {
                    output::info(format!("Selected: {}", items[index]));
                    return Ok(Some(index));
                }
                output::warning(format!("Pick a number between 1 and {}", items.len()));
            }
        }
    }
}

// Accepts a 1-based position or the exact item label.
fn match_choice(raw: &str, items: &[String]) -> Option<usize> {
    let trimmed = raw.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        if (1..=items.len()).contains(&number) {
            return Some(number - 1);
        }
    }
    items
        .iter()
        .position(|item| item.eq_ignore_ascii_case(trimmed))
}

fn scripted_text(label: &str, allow_empty: bool) -> Result<Option<String>, CliError> {
    output::prompt(label);
    loop {
        match script::read_reply() {
            ScriptAnswer::Cancel => return Ok(None),
            ScriptAnswer::Value(raw) => {
                let value = raw.trim().to_string();
                if value.is_empty() && !allow_empty {
                    output::warning("A value is required here");
                    continue;
                }
                return Ok(Some(value));
            }
        }
    }
}

fn scripted_confirm(label: &str, default: bool) -> Result<Option<bool>, CliError> {
    let hint = if default { "Y/n" } else { "y/N" };
    output::prompt(format!("{label} [{hint}]"));
    loop {
        match script::read_reply() {
            ScriptAnswer::Cancel => return Ok(None),
            ScriptAnswer::Value(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => output::warning("Answer y or n"),
            },
        }
    }
}
