#![allow(dead_code)]

use cashflow::domain::error::CashflowError;
use cashflow::domain::portfolio::PortfolioConfig;
use cashflow::ports::input_port::{InputPort, parse_amount};
use std::collections::VecDeque;

/// Replays typed answers; invalid amounts are skipped the way a user would be re-prompted.
pub struct ScriptedInput {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub rejected: usize,
}

impl ScriptedInput {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
            rejected: 0,
        }
    }

    fn next_answer(&mut self) -> Result<String, CashflowError> {
        self.answers
            .pop_front()
            .ok_or_else(|| CashflowError::Prompt("script ran out of answers".to_string()))
    }
}

impl InputPort for ScriptedInput {
    fn read_amount(&mut self, prompt: &str) -> Result<f64, CashflowError> {
        self.prompts.push(prompt.to_string());
        loop {
            let answer = self.next_answer()?;
            match parse_amount(&answer) {
                Ok(value) => return Ok(value),
                Err(_) => self.rejected += 1,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CashflowError> {
        self.prompts.push(prompt.to_string());
        Ok(self.next_answer()? == "y")
    }
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn equal_portfolio(count: usize) -> PortfolioConfig {
    let names = (0..count).map(|i| format!("Fund {}", i + 1)).collect();
    PortfolioConfig::new(names, vec![1.0 / count as f64; count])
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
