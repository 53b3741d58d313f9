//! Insurance Termination CLI
//!
//! Prints the earliest possible termination date of a non-life insurance
//! contract given its start date, the holder's earliest wanted termination
//! date and the date notice is given (today by default).

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use insurance_termination::{parse_date, RuleSet, TerminationCalculator, TerminationRequest};

/// Earliest possible termination date of a Belgian non-life insurance contract.
///
/// Applies to consumer contracts started or renewed after April 4, 2014. Termination
/// following a claim, a non-payment or a premium increase is not covered.
#[derive(Parser)]
#[command(name = "insurance_termination", version)]
struct Cli {
    /// Starting date of the contract, when it first took effect (YYYY-MM-DD)
    #[arg(value_name = "CONTRACT_START_DATE", value_parser = parse_date)]
    contract_start: NaiveDate,

    /// Earliest termination date wanted by the policy holder (YYYY-MM-DD)
    #[arg(short = 't', long, value_name = "EARLIEST_EXPECTED_TERMINATION", value_parser = parse_date)]
    earliest_expected_termination: Option<NaiveDate>,

    /// First date at which notice can be given (YYYY-MM-DD, defaults to today)
    #[arg(short = 'r', long, value_name = "REFERENCE_DATE", value_parser = parse_date)]
    reference_date: Option<NaiveDate>,

    /// TOML rule set overriding the built-in Belgian rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Also print how the date was reached
    #[arg(long)]
    explain: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let rules = match &cli.rules {
        Some(path) => RuleSet::from_path(path)
            .with_context(|| format!("cannot use rule set {}", path.display()))?,
        None => RuleSet::belgium_2024(),
    };

    let request = TerminationRequest {
        contract_start: cli.contract_start,
        reference_date: cli.reference_date,
        earliest_expected_termination: cli.earliest_expected_termination,
    };

    let today = Local::now().date_naive();
    let outcome = TerminationCalculator::new(rules).evaluate(&request, today)?;

    println!("{}", outcome.summary_line());
    if cli.explain {
        println!("{}", outcome.explanation());
    }

    Ok(())
}
