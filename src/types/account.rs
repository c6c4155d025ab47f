//! Account-related types for the ledger engine
//!
//! This module defines the validated identifier and holder-name value types
//! and the Account structure holding current account state.
//!
//! Identifiers and names are only constructible through validating
//! factories, so an `Account` can never carry an empty identifier or an
//! empty holder name.

use super::error::LedgerError;
use rust_decimal::Decimal;
use std::fmt;

/// Unique, caller-supplied account identifier
///
/// Guaranteed non-empty. Surrounding whitespace is trimmed at construction
/// so identifiers round-trip cleanly through the line-oriented stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier, rejecting empty input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, LedgerError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::invalid_input(
                "account identifier must not be empty",
            ));
        }
        Ok(AccountId(trimmed.to_string()))
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account holder's name
///
/// Guaranteed non-empty, trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderName(String);

impl HolderName {
    /// Create a holder name, rejecting empty input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, LedgerError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::invalid_input("holder name must not be empty"));
        }
        Ok(HolderName(trimmed.to_string()))
    }

    /// View the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current state of one account
///
/// Invariant: `balance >= 0` after every committed operation. The balance
/// must always equal the sum of journaled deposits minus the sum of
/// journaled withdrawals for this account.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// The validated account identifier
    pub id: AccountId,

    /// The validated account holder's name
    pub holder: HolderName,

    /// Current balance, two-decimal monetary precision
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(id: AccountId, holder: HolderName) -> Self {
        Account {
            id,
            holder,
            balance: Decimal::ZERO,
        }
    }
}
