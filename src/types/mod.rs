//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Validated identifiers and account state
//! - `transaction`: Transaction kinds, validated amounts, journal records
//! - `error`: Error types for the ledger engine

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountId, HolderName};
pub use error::LedgerError;
pub use transaction::{Amount, TransactionKind, TransactionRecord};
