use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use emi_core::amortization::{calculate_loan_with_warnings, LoanInput, LoanSchedule, LoanSummary};
use emi_core::ComputationOutput;

use crate::config::CliConfig;
use crate::input;
use crate::output::html;

/// Loan parameters shared by every calculation command
#[derive(Args, Debug, Clone, Default)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, alias = "amount", allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long, alias = "interest-rate", allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Tenure in whole years
    #[arg(long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Additional months of tenure
    #[arg(long, allow_hyphen_values = true)]
    pub months: Option<String>,
}

/// Arguments for the printable schedule
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Write the HTML document here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl LoanArgs {
    fn to_loan_input(&self) -> Result<LoanInput, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            debug!(%path, "reading loan input from file");
            return input::file::read_loan_input(path);
        }
        if let Some(data) = input::stdin::read_stdin()? {
            debug!("reading loan input from stdin");
            return Ok(data);
        }
        Ok(LoanInput::from_text(
            self.principal.as_deref().unwrap_or_default(),
            self.rate.as_deref().unwrap_or_default(),
            self.years.as_deref().unwrap_or_default(),
            self.months.as_deref().unwrap_or_default(),
        ))
    }
}

/// Validate, clamp to the configured limits, and run the engine.
/// `None` means the installment was not representable.
fn compute(
    args: &LoanArgs,
    config: &CliConfig,
) -> Result<Option<ComputationOutput<LoanSchedule>>, Box<dyn std::error::Error>> {
    let mut loan_input = args.to_loan_input()?;
    let warnings = config.limits.apply(&mut loan_input);
    let output = calculate_loan_with_warnings(&loan_input, warnings)?;
    match &output {
        Some(out) => info!(
            installment = %out.result.installment,
            tenure = out.result.tenure_months(),
            "loan calculated"
        ),
        None => debug!("installment not representable, nothing to display"),
    }
    Ok(output)
}

pub fn run_calculate(
    args: LoanArgs,
    config: &CliConfig,
) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let Some(output) = compute(&args, config)? else {
        return Ok(None);
    };
    let summary = output.map(|schedule| LoanSummary::from(&schedule));
    Ok(Some(serde_json::to_value(summary)?))
}

pub fn run_schedule(
    args: LoanArgs,
    config: &CliConfig,
) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let Some(output) = compute(&args, config)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::to_value(output)?))
}

pub fn run_print(
    args: PrintArgs,
    config: &CliConfig,
) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let Some(output) = compute(&args.loan, config)? else {
        return Ok(None);
    };
    let document = html::render_schedule(&output.result, &config.currency);
    match args.out {
        Some(path) => {
            fs::write(&path, document)
                .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
            info!(path = %path.display(), "schedule written");
        }
        None => print!("{}", document),
    }
    Ok(None)
}
