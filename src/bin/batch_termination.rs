//! Evaluate termination dates for a CSV file of contracts
//!
//! Usage: batch_termination contracts.csv -o terminations.csv [-r 2025-11-05] [--rules rules.toml]

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rayon::prelude::*;

use insurance_termination::contract::{load_contracts, write_rows, TerminationRow};
use insurance_termination::{parse_date, RuleSet, TerminationCalculator};

/// Evaluate the earliest termination date of every contract in a CSV file
#[derive(Parser)]
#[command(name = "batch_termination", version)]
struct Args {
    /// Contracts CSV (contract_id,contract_start,reference_date,earliest_expected_termination)
    input: PathBuf,

    /// Output CSV; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reference date for rows that leave it empty (defaults to today)
    #[arg(short = 'r', long, value_name = "REFERENCE_DATE", value_parser = parse_date)]
    reference_date: Option<NaiveDate>,

    /// TOML rule set overriding the built-in Belgian rules
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let start = Instant::now();

    let rules = match &args.rules {
        Some(path) => RuleSet::from_path(path)
            .with_context(|| format!("cannot use rule set {}", path.display()))?,
        None => RuleSet::belgium_2024(),
    };
    let calculator = TerminationCalculator::new(rules);

    let contracts = load_contracts(&args.input)
        .with_context(|| format!("cannot load contracts from {}", args.input.display()))?;
    log::info!("Loaded {} contracts in {:?}", contracts.len(), start.elapsed());

    let default_reference = args.reference_date.unwrap_or_else(|| Local::now().date_naive());

    // Evaluate in parallel; collect keeps input order
    let eval_start = Instant::now();
    let rows: Vec<TerminationRow> = contracts
        .par_iter()
        .map(|contract| contract.evaluate(&calculator, default_reference))
        .collect();

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    log::info!(
        "Evaluated {} contracts in {:?} ({} failed)",
        rows.len(),
        eval_start.elapsed(),
        failed
    );
    for row in rows.iter().filter(|r| r.error.is_some()) {
        log::warn!("contract {}: {}", row.contract_id, row.error.as_deref().unwrap_or_default());
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            write_rows(file, &rows)?;
            log::info!("Output written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_rows(&mut handle, &rows)?;
            handle.flush()?;
        }
    }

    log::info!("Total time: {:?}", start.elapsed());
    Ok(())
}
