//! Plain-text report adapter.
//!
//! Renders bordered ASCII tables:
//! - current portfolio with total value
//! - portfolio fully rebalanced with the minimum capital
//! - rebalancing amount per position
//! - portfolio after investing the new capital

use std::io::Write;

use crate::domain::error::CashflowError;
use crate::domain::plan::{Allocation, Assessment};
use crate::domain::position::{Holding, total_value};
use crate::ports::report_port::ReportPort;

pub struct TextReportAdapter {
    currency: String,
}

impl TextReportAdapter {
    pub fn new(currency: impl Into<String>) -> Self {
        TextReportAdapter {
            currency: currency.into(),
        }
    }

    pub fn format_money(&self, value: f64) -> String {
        // keep float noise from printing as -0.00
        let value = if value.abs() < 0.005 { 0.0 } else { value };
        format!("{value:.2} {}", self.currency)
    }

    fn holdings_table(&self, holdings: &[Holding], total_label: &str) -> String {
        let mut rows: Vec<Vec<String>> = holdings
            .iter()
            .map(|h| {
                vec![
                    h.name.clone(),
                    self.format_money(h.value),
                    format_percent(h.weight),
                ]
            })
            .collect();
        rows.push(vec![String::new(); 3]);
        rows.push(vec![
            total_label.to_string(),
            self.format_money(total_value(holdings)),
            String::new(),
        ]);
        render_table(&["Position", "Value", "Distribution"], &rows)
    }
}

impl ReportPort for TextReportAdapter {
    fn write_assessment(
        &self,
        assessment: &Assessment,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError> {
        writeln!(out, "\n Your current portfolio:")?;
        write!(
            out,
            "{}",
            self.holdings_table(&assessment.current, "Total portfolio value")
        )?;
        writeln!(
            out,
            "\nTo rebalance fully, you need to invest a minimum of {}\n",
            self.format_money(assessment.minimum_total)
        )?;
        Ok(())
    }

    fn write_fully_rebalanced(
        &self,
        assessment: &Assessment,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError> {
        writeln!(
            out,
            "\n Your portfolio after rebalancing with {}:",
            self.format_money(assessment.minimum_total)
        )?;
        write!(
            out,
            "{}",
            self.holdings_table(&assessment.fully_rebalanced, "Total")
        )?;
        Ok(())
    }

    fn write_allocation(
        &self,
        allocation: &Allocation,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError> {
        let rows: Vec<Vec<String>> = allocation
            .names()
            .zip(allocation.outcome.amounts())
            .map(|(name, amount)| vec![name.to_string(), self.format_money(*amount)])
            .collect();

        writeln!(
            out,
            "\n Your rebalancing amounts for {} are:",
            self.format_money(allocation.capital)
        )?;
        write!(
            out,
            "{}",
            render_table(&["Position", "Rebalancing amount"], &rows)
        )?;
        if allocation.uninvested > 0.0 {
            writeln!(
                out,
                "\n{} cannot be placed in whole units and stays uninvested.",
                self.format_money(allocation.uninvested)
            )?;
        }

        writeln!(out, "\n Your portfolio after rebalancing:")?;
        write!(out, "{}", self.holdings_table(&allocation.after, "Total"))?;
        writeln!(out)?;
        Ok(())
    }
}

pub fn format_percent(weight: f64) -> String {
    format!("{:.2} %", weight * 100.0)
}

/// Bordered table with centred cells, one space of padding either side.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border: String = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .fold(String::from("+"), |mut acc, seg| {
            acc.push_str(&seg);
            acc.push('+');
            acc
        });

    let mut output = String::new();
    output.push_str(&border);
    output.push('\n');
    push_row(&mut output, headers.iter().copied(), &widths);
    output.push_str(&border);
    output.push('\n');
    for row in rows {
        push_row(&mut output, row.iter().map(String::as_str), &widths);
    }
    output.push_str(&border);
    output.push('\n');
    output
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    output.push('|');
    for (cell, width) in cells.zip(widths) {
        let free = width - cell.chars().count();
        let left = free / 2;
        output.push(' ');
        output.push_str(&" ".repeat(left));
        output.push_str(cell);
        output.push_str(&" ".repeat(free - left));
        output.push_str(" |");
    }
    output.push('\n');
}
