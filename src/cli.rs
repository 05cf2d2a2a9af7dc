//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::terminal_input_adapter::TerminalInputAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::config_validation::{
    SECTION, parse_names, parse_precision, parse_targets, validate_portfolio_config,
};
use crate::domain::error::CashflowError;
use crate::domain::plan::{Assessment, RebalancePlan};
use crate::domain::portfolio::{DEFAULT_CURRENCY, PortfolioConfig};
use crate::ports::config_port::ConfigPort;
use crate::ports::input_port::{InputPort, parse_amount, parse_amounts};
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "cashflow", about = "Cash-flow rebalancing calculator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for position values and new capital interactively
    Run {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Compute a plan from values given on the command line
    Plan {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Comma-separated position values, in configured order
        #[arg(long)]
        values: String,
        /// New capital to invest
        #[arg(long)]
        capital: String,
        /// Also print the fully rebalanced portfolio
        #[arg(long)]
        show_full: bool,
    },
    /// Validate a portfolio configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run { config } => run_interactive(config.as_ref()),
        Command::Plan {
            config,
            values,
            capital,
            show_full,
        } => run_plan(config.as_ref(), &values, &capital, show_full),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = CashflowError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_portfolio_config(adapter: &dyn ConfigPort) -> Result<PortfolioConfig, CashflowError> {
    validate_portfolio_config(adapter)?;

    Ok(PortfolioConfig {
        currency: adapter
            .get_string(SECTION, "currency")
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        precision: parse_precision(adapter)?,
        names: parse_names(adapter)?,
        targets: parse_targets(adapter)?,
    })
}

/// Portfolio from `config_path`, or the built-in default when none is given.
pub fn resolve_portfolio(config_path: Option<&PathBuf>) -> Result<PortfolioConfig, ExitCode> {
    let Some(path) = config_path else {
        debug!("no config given, using the default portfolio");
        return Ok(PortfolioConfig::default());
    };

    eprintln!("Loading config from {}", path.display());
    let adapter = load_config(path)?;
    build_portfolio_config(&adapter).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

/// Walks through one interactive session and returns the resulting plan.
pub fn run_session(
    portfolio: &PortfolioConfig,
    input: &mut dyn InputPort,
    report: &dyn ReportPort,
    out: &mut dyn Write,
) -> Result<RebalancePlan, CashflowError> {
    writeln!(
        out,
        "\nPlease insert your current portfolio position values in {}:\n",
        portfolio.currency
    )?;
    let mut values = Vec::with_capacity(portfolio.position_count());
    for name in &portfolio.names {
        values.push(input.read_amount(name)?);
    }

    let assessment = Assessment::build(portfolio, &values)?;
    report.write_assessment(&assessment, out)?;

    if input.confirm("Show portfolio fully rebalanced?")? {
        report.write_fully_rebalanced(&assessment, out)?;
    }

    let capital = input.read_amount("How much do you want to invest?")?;
    let allocation = assessment.allocate(capital)?;
    report.write_allocation(&allocation, out)?;

    Ok(RebalancePlan {
        assessment,
        allocation,
    })
}

fn run_interactive(config_path: Option<&PathBuf>) -> ExitCode {
    let portfolio = match resolve_portfolio(config_path) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let mut input = TerminalInputAdapter::new();
    let report = TextReportAdapter::new(portfolio.currency.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_session(&portfolio, &mut input, &report, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Non-interactive plan: parses the raw flag values and writes every table.
pub fn plan_from_args(
    portfolio: &PortfolioConfig,
    values: &str,
    capital: &str,
) -> Result<RebalancePlan, CashflowError> {
    let values = parse_amounts(values).map_err(relabel("values"))?;
    let capital = parse_amount(capital).map_err(relabel("capital"))?;
    RebalancePlan::build(portfolio, &values, capital)
}

/// Names the flag an amount parse error came from.
fn relabel(field: &'static str) -> impl Fn(CashflowError) -> CashflowError {
    move |e| match e {
        CashflowError::InvalidInput { reason, .. } => CashflowError::invalid_input(field, reason),
        other => other,
    }
}

fn run_plan(config_path: Option<&PathBuf>, values: &str, capital: &str, show_full: bool) -> ExitCode {
    let portfolio = match resolve_portfolio(config_path) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let plan = match plan_from_args(&portfolio, values, capital) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let report = TextReportAdapter::new(portfolio.currency.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match report.write_plan(&plan, show_full, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating portfolio: {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let portfolio = match build_portfolio_config(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nPositions:");
    for (name, target) in portfolio.names.iter().zip(&portfolio.targets) {
        eprintln!("  {:>6.2} %  {}", target * 100.0, name);
    }
    eprintln!("\nCurrency:  {}", portfolio.currency);
    eprintln!("Precision: {}", portfolio.precision);

    eprintln!("\nPortfolio configuration is valid.");
    ExitCode::SUCCESS
}
