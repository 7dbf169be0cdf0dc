//! Payout Bank Accounts CLI
//!
//! Command-line interface for validating payout bank accounts from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv > reports.csv
//! cargo run -- --strategy sync accounts.csv > reports.csv
//! cargo run -- --strategy async --batch-size 2000 --worker-threads 8 accounts.csv > reports.csv
//! cargo run -- -vv accounts.csv > reports.csv
//! cargo run -- --list-countries
//! ```
//!
//! The program reads bank account records from the input CSV file, validates
//! them against their country's rules using the selected processing strategy,
//! and writes one report per account to stdout. Logs go to stderr.
//!
//! # Processing Strategies
//!
//! - **sync**: Streaming CSV parsing with single-threaded validation
//! - **async**: Batch processing with one task per country (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use payout_bank_accounts::cli;
use payout_bank_accounts::core::RuleRegistry;
use payout_bank_accounts::io::write_countries_csv;
use payout_bank_accounts::strategy;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_filter()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut output = std::io::stdout();

    if args.list_countries {
        if let Err(e) = write_countries_csv(RuleRegistry::global(), &mut output) {
            tracing::error!("{}", e);
            process::exit(1);
        }
        return;
    }

    let Some(input_file) = args.input_file.as_deref() else {
        tracing::error!("No input file given");
        process::exit(1);
    };

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    if let Err(e) = strategy.process(input_file, &mut output) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
