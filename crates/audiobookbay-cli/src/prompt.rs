//! Line-based prompting behind a trait, so the session can be driven by
//! scripted input in tests.

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Source of interactive user input.
pub trait Prompter {
    /// Read one line of input under the given prompt.
    fn line(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question. Defaults to "no".
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Prompter backed by the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn line(&mut self, prompt: &str) -> Result<String> {
        let input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(input)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
