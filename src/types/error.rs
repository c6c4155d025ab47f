//! Error types for the ledger engine
//!
//! This module defines all error types that can occur during ledger
//! operations. Errors are designed to be descriptive and user-friendly for
//! CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Empty identifiers, non-positive amounts, etc.
//! - **Account Errors**: Unknown account, duplicate account, insufficient funds.
//! - **Persistence Errors**: I/O failures on the snapshot or journal stores.
//! - **Integrity Errors**: Unparsable persisted lines, snapshot/journal disagreement.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// This enum represents all possible errors that can occur while operating
/// on the ledger. Each variant includes relevant context to help diagnose
/// and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Caller-supplied input failed validation
    ///
    /// Covers empty identifiers and holder names, non-positive amounts,
    /// and amounts with more than two decimal places.
    /// This is a recoverable error - the operation is rejected and no
    /// state changes.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what failed validation
        reason: String,
    },

    /// The referenced account does not exist in the registry
    ///
    /// This is a recoverable error - the operation is rejected.
    #[error("Unknown account '{account}'")]
    UnknownAccount {
        /// The account identifier that was not found
        account: String,
    },

    /// An account with this identifier already exists
    ///
    /// This is a recoverable error - the existing account is left untouched.
    #[error("Account '{account}' already exists")]
    DuplicateAccount {
        /// The account identifier that is already registered
        account: String,
    },

    /// Withdrawal amount exceeds the current balance
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// balance remains unchanged.
    #[error(
        "Insufficient funds for account '{account}': balance {balance}, requested {requested}"
    )]
    InsufficientFunds {
        /// The account identifier
        account: String,
        /// Current balance
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// A persisted line could not be parsed
    ///
    /// Fatal when loading the snapshot store. When loading the journal the
    /// offending line is skipped and this error is aggregated into the
    /// warning list returned alongside the successfully parsed records.
    #[error("Corrupt record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CorruptFormat {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A stored snapshot balance disagrees with the journal-derived total
    ///
    /// Surfaced as a startup warning; the balance is rebuilt from the
    /// journal (the authoritative history) rather than aborting.
    #[error("Ledger inconsistent for account '{account}': snapshot balance {stored}, journal-derived {derived}")]
    LedgerInconsistent {
        /// The account identifier
        account: String,
        /// Balance recorded in the snapshot
        stored: Decimal,
        /// Balance derived by replaying the journal
        derived: Decimal,
    },

    /// I/O error while reading or writing a store
    ///
    /// Propagated to the caller. A failed snapshot save after a successful
    /// journal append does NOT roll back the journal entry.
    #[error("Persistence failure: {message}")]
    PersistenceFailure {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::PersistenceFailure {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError. Underlying I/O failures map to
// PersistenceFailure; everything else is a malformed record.
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return LedgerError::PersistenceFailure {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LedgerError::CorruptFormat {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidInput error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LedgerError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account: impl Into<String>) -> Self {
        LedgerError::UnknownAccount {
            account: account.into(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: impl Into<String>) -> Self {
        LedgerError::DuplicateAccount {
            account: account.into(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(
        account: impl Into<String>,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientFunds {
            account: account.into(),
            balance,
            requested,
        }
    }

    /// Create a CorruptFormat error
    pub fn corrupt_format(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::CorruptFormat {
            line,
            message: message.into(),
        }
    }

    /// Create a LedgerInconsistent error
    pub fn ledger_inconsistent(
        account: impl Into<String>,
        stored: Decimal,
        derived: Decimal,
    ) -> Self {
        LedgerError::LedgerInconsistent {
            account: account.into(),
            stored,
            derived,
        }
    }

    /// Create a PersistenceFailure error
    pub fn persistence_failure(message: impl Into<String>) -> Self {
        LedgerError::PersistenceFailure {
            message: message.into(),
        }
    }
}
