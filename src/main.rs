//! Ledger Engine CLI
//!
//! Command-line collaborator for the ledger engine. Each subcommand maps
//! 1:1 onto one engine operation; there is no interactivity or prompting.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --data-dir ./ledger create A1 Alice
//! cargo run -- --data-dir ./ledger deposit A1 100.00
//! cargo run -- --data-dir ./ledger withdraw A1 40.00
//! cargo run -- --data-dir ./ledger balance A1
//! cargo run -- --data-dir ./ledger list
//! cargo run -- --data-dir ./ledger transactions A1
//! cargo run -- --data-dir ./ledger totals A1
//! ```
//!
//! Results go to stdout; warnings and errors to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (validation failure, unknown account, persistence failure, etc.)

use rust_ledger_engine::cli::{self, CliArgs, Command};
use rust_ledger_engine::io::LedgerPaths;
use rust_ledger_engine::types::{AccountId, Amount, HolderName, LedgerError};
use rust_ledger_engine::LedgerEngine;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), LedgerError> {
    let mut engine = LedgerEngine::open(LedgerPaths::in_dir(&args.data_dir))?;

    for warning in engine.recovery_warnings() {
        eprintln!("Warning: {}", warning);
    }

    match args.command {
        Command::Create { account, holder } => {
            let account =
                engine.create_account(AccountId::new(account)?, HolderName::new(holder)?)?;
            println!(
                "Created account '{}' for {} with balance {:.2}",
                account.id, account.holder, account.balance
            );
        }

        Command::Deposit { account, amount } => {
            let account = engine.deposit(&AccountId::new(account)?, Amount::new(amount)?)?;
            println!(
                "Deposited {:.2}. Current balance: {:.2}",
                amount, account.balance
            );
        }

        Command::Withdraw { account, amount } => {
            let account = engine.withdraw(&AccountId::new(account)?, Amount::new(amount)?)?;
            println!(
                "Withdrew {:.2}. Current balance: {:.2}",
                amount, account.balance
            );
        }

        Command::Balance { account } => {
            let account = engine.balance_of(&AccountId::new(account)?)?;
            println!("Account holder: {}", account.holder);
            println!("Balance: {:.2}", account.balance);
        }

        Command::List => {
            println!("account,holder,balance");
            for account in engine.list_accounts() {
                println!("{},{},{:.2}", account.id, account.holder, account.balance);
            }
        }

        Command::Transactions { account } => {
            println!("kind,amount");
            for record in engine.transactions_of(&AccountId::new(account)?)? {
                println!("{},{:.2}", record.kind, record.amount.get());
            }
        }

        Command::Totals { account } => {
            let totals = engine.aggregate_totals(&AccountId::new(account)?)?;
            println!("Total deposits: {:.2}", totals.deposits);
            println!("Total withdrawals: {:.2}", totals.withdrawals);
        }
    }

    Ok(())
}
