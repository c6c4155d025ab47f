//! Transaction-related types for the ledger engine
//!
//! This module defines the transaction kind, the validated transaction
//! amount, and the immutable journal record appended for every committed
//! deposit or withdrawal.

use super::account::AccountId;
use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;

/// The two financial event kinds recorded in the journal
///
/// Serialized with the exact literal strings `"Deposit"` and `"Withdraw"`
/// in the journal store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires a sufficient balance; the engine never journals a
    /// withdrawal that would take the balance below zero.
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdraw => f.write_str("Withdraw"),
        }
    }
}

/// A validated transaction amount
///
/// Guaranteed strictly positive with at most two decimal places. Only
/// constructible through [`Amount::new`], so a `TransactionRecord` can
/// never carry a zero, negative, or sub-cent amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount, validating sign and precision
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value is zero or negative, or carries
    /// more than two decimal places.
    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value <= Decimal::ZERO {
            return Err(LedgerError::invalid_input(format!(
                "amount must be positive, got {}",
                value
            )));
        }
        if value.round_dp(2) != value {
            return Err(LedgerError::invalid_input(format!(
                "amount must have at most two decimal places, got {}",
                value
            )));
        }
        Ok(Amount(value))
    }

    /// The underlying decimal value
    pub fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Immutable journal record for one committed deposit or withdrawal
///
/// Appended once, never mutated or removed. The ordered sequence of all
/// records for an account, starting from a balance of 0, reconstructs
/// that account's current balance exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The account this transaction applies to
    pub account: AccountId,

    /// Deposit or Withdraw
    pub kind: TransactionKind,

    /// The validated transaction amount
    pub amount: Amount,
}
