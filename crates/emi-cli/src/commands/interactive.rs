//! Line-oriented calculator session.
//!
//! ```text
//! calc <principal> <rate> [years] [months]
//! summary | show | reset | help | quit
//! ```

use clap::Args;
use serde_json::Value;
use std::io::{self, BufRead, Write};

use emi_core::amortization::{LoanInput, LoanSummary};
use emi_core::formatting::CurrencyFormat;

use crate::config::CliConfig;
use crate::output::table;
use crate::session::Session;

const HELP: &str = "commands:
  calc <principal> <rate> [years] [months]   calculate a loan
  summary                                   EMI and totals of the current loan
  show                                      full amortization schedule
  reset                                     clear the current loan
  quit                                      leave";

/// Arguments for the interactive session
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Do not print the prompt (for piped input)
    #[arg(long)]
    pub no_prompt: bool,
}

pub fn run_interactive(
    args: InteractiveArgs,
    config: &CliConfig,
) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), config, !args.no_prompt)?;
    Ok(None)
}

pub fn run_session<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    config: &CliConfig,
    prompt: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config.limits.clone());
    let currency = &config.currency;

    if prompt {
        write!(writer, "emi> ")?;
        writer.flush()?;
    }
    for line in reader.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "calc" | "calculate" => {
                let fields: Vec<&str> = words.collect();
                let field = |i: usize| fields.get(i).copied().unwrap_or("");
                let loan_input = LoanInput::from_text(field(0), field(1), field(2), field(3));
                let outcome = session
                    .calculate(loan_input)
                    .map(|schedule| schedule.map(LoanSummary::from));
                match outcome {
                    Ok(Some(summary)) => {
                        writeln!(writer, "{}", summary_line(&summary, currency))?;
                        for w in session.warnings() {
                            writeln!(writer, "warning: {}", w)?;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => writeln!(writer, "error[{}]: {}", e.kind(), e.user_message())?,
                }
            }
            "summary" => match session.current() {
                Some(schedule) => {
                    let value = serde_json::to_value(LoanSummary::from(schedule))?;
                    writeln!(writer, "{}", table::render_table(&value, currency))?;
                }
                None => writeln!(writer, "no loan calculated")?,
            },
            "show" => match session.current() {
                Some(schedule) => {
                    let value = serde_json::to_value(schedule)?;
                    writeln!(writer, "{}", table::render_table(&value, currency))?;
                }
                None => writeln!(writer, "no loan calculated")?,
            },
            "reset" => {
                session.reset();
                writeln!(writer, "cleared")?;
            }
            "help" => writeln!(writer, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(writer, "unknown command '{}', try 'help'", other)?,
        }

        if prompt {
            write!(writer, "emi> ")?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn summary_line(summary: &LoanSummary, currency: &CurrencyFormat) -> String {
    format!(
        "EMI {} | interest {} | total {} | {} months",
        currency.format(summary.installment),
        currency.format(summary.total_interest),
        currency.format(summary.total_payable),
        summary.tenure_months
    )
}
