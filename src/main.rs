//! Expense Splitter CLI
//!
//! Command-line interface for computing group balances and settlements from CSV
//! ledger files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ledger.csv > balances.csv
//! cargo run -- --strategy sync ledger.csv > balances.csv
//! cargo run -- --format json --group 1 ledger.csv > trip.json
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 ledger.csv
//! ```
//!
//! Reports go to stdout; diagnostics go to stderr and are controlled with
//! `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, unknown group, etc.)

use expense_splitter::cli;
use expense_splitter::strategy;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config, args.to_output_config())
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
