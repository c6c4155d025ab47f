use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Maintain durable accounts and an append-only transaction journal
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(
    about = "Maintain durable accounts and an append-only transaction journal",
    long_about = None
)]
pub struct CliArgs {
    /// Directory holding the snapshot and journal stores
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding the account snapshot and transaction journal"
    )]
    pub data_dir: PathBuf,

    /// The ledger operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations, mapped 1:1 onto the engine API
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create a new account with a zero balance
    Create {
        /// New account identifier
        account: String,
        /// Account holder's name
        holder: String,
    },

    /// Deposit funds into an account
    Deposit {
        /// Account identifier
        account: String,
        /// Amount to deposit (positive, at most two decimal places)
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account identifier
        account: String,
        /// Amount to withdraw (positive, at most two decimal places)
        amount: Decimal,
    },

    /// Show an account's holder and current balance
    Balance {
        /// Account identifier
        account: String,
    },

    /// List all accounts as CSV on stdout
    List,

    /// List all transactions for an account as CSV on stdout
    Transactions {
        /// Account identifier
        account: String,
    },

    /// Show aggregate deposit and withdrawal totals for an account
    Totals {
        /// Account identifier
        account: String,
    },
}
