//! Payment optimizer CLI
//!
//! Compares paying a card statement on the statement date, halfway through the
//! cycle and on the due date, and prints the result as JSON.

use clap::Parser;
use payment_optimizer_rs::chrono::{DateTime, Utc};
use payment_optimizer_rs::{Decimal, Money, OptimizerView, PaymentOptimizerInput};
use std::fs;
use std::io::{self, Read};
use std::process;

/// Find the cheapest day to pay a credit card statement
#[derive(Parser)]
#[command(name = "payment-optimizer", version)]
struct Cli {
    /// Path to a JSON request, or `-` to read it from stdin (overrides individual flags)
    #[arg(long)]
    input: Option<String>,

    /// Statement balance
    #[arg(long)]
    balance: Option<Money>,

    /// Purchase APR in percent, e.g. 22.5
    #[arg(long)]
    apr: Option<Decimal>,

    /// Statement date (RFC 3339, e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    statement_date: Option<DateTime<Utc>>,

    /// Due date (RFC 3339)
    #[arg(long)]
    due_date: Option<DateTime<Utc>>,

    /// Minimum payment
    #[arg(long, default_value = "0")]
    minimum_payment: Money,

    /// Extra payment on top of the minimum
    #[arg(long, default_value = "0")]
    extra_payment: Money,

    /// Include day-by-day accrual curves in the output
    #[arg(long)]
    curves: bool,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let input = read_input(cli)?;
    log::info!(
        "optimizing balance {} at {}% from {} to {}",
        input.balance,
        input.apr,
        input.statement_date,
        input.due_date
    );

    let view = OptimizerView::build(&input, cli.curves)?;
    let json = if cli.compact {
        serde_json::to_string(&view)?
    } else {
        view.to_json_pretty()?
    };
    Ok(json)
}

fn read_input(cli: &Cli) -> Result<PaymentOptimizerInput, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.input {
        let contents = if path == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?
        };
        return Ok(PaymentOptimizerInput::from_json(contents.trim())?);
    }

    let balance = cli.balance.ok_or("--balance is required without --input")?;
    let apr = cli.apr.ok_or("--apr is required without --input")?;
    let statement_date = cli
        .statement_date
        .ok_or("--statement-date is required without --input")?;
    let due_date = cli.due_date.ok_or("--due-date is required without --input")?;

    Ok(PaymentOptimizerInput::new(balance, apr, statement_date, due_date)
        .with_minimum_payment(cli.minimum_payment)
        .with_extra_payment(cli.extra_payment))
}
