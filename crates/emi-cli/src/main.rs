mod commands;
mod config;
mod input;
mod output;
mod session;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emi_core::EmiError;

use commands::interactive::InteractiveArgs;
use commands::loan::{LoanArgs, PrintArgs};

/// Loan EMI and amortization schedule calculator
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Loan EMI and amortization schedule calculator",
    long_about = "Computes the equated monthly installment, total interest and total \
                  payable for a fixed-rate loan, and its month-by-month amortization \
                  schedule, with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the config file's, then json)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,

    /// Path to a YAML config file (defaults to ./emi.yaml if present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// EMI, total interest and total payable
    Calculate(LoanArgs),
    /// Full month-by-month amortization schedule
    Schedule(LoanArgs),
    /// Printable HTML amortization schedule
    Print(PrintArgs),
    /// Interactive calculator session on stdin
    Interactive(InteractiveArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn report_error(e: &(dyn std::error::Error + 'static)) {
    match e.downcast_ref::<EmiError>() {
        Some(emi) => {
            eprintln!(
                "{}: {}",
                format!("error[{}]", emi.kind()).red().bold(),
                emi.user_message()
            );
            eprintln!("  {}", emi);
        }
        None => eprintln!("{}: {}", "error".red().bold(), e),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(e.as_ref());
            process::exit(1);
        }
    };
    let format = cli
        .output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or(OutputFormat::Json);

    let result: Result<Option<serde_json::Value>, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::loan::run_calculate(args, &config),
        Commands::Schedule(args) => commands::loan::run_schedule(args, &config),
        Commands::Print(args) => commands::loan::run_print(args, &config),
        Commands::Interactive(args) => commands::interactive::run_interactive(args, &config),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(Some(value)) => {
            output::format_output(&format, &value, &config.currency);
            process::exit(0);
        }
        Ok(None) => process::exit(0),
        Err(e) => {
            report_error(e.as_ref());
            process::exit(1);
        }
    }
}
