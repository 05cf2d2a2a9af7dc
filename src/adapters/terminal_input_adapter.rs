//! Terminal input adapter backed by dialoguer prompts.

use dialoguer::{Confirm, Input};

use crate::domain::error::CashflowError;
use crate::ports::input_port::{InputPort, parse_amount};

#[derive(Debug, Default)]
pub struct TerminalInputAdapter;

impl TerminalInputAdapter {
    pub fn new() -> Self {
        TerminalInputAdapter
    }
}

impl InputPort for TerminalInputAdapter {
    fn read_amount(&mut self, prompt: &str) -> Result<f64, CashflowError> {
        // dialoguer keeps re-prompting until the validator accepts the text
        let raw: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), String> {
                parse_amount(input)
                    .map(|_| ())
                    .map_err(|_| "Please write a valid positive number.".to_string())
            })
            .interact_text()
            .map_err(|e| CashflowError::Prompt(e.to_string()))?;
        parse_amount(&raw)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CashflowError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| CashflowError::Prompt(e.to_string()))
    }
}
