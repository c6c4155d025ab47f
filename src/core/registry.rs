//! Account registry
//!
//! This module provides the `AccountRegistry` struct, the in-memory source
//! of truth for current account state (identifier, holder name, balance).
//!
//! The registry is responsible for:
//! - Creating accounts (rejecting duplicates)
//! - Pure in-memory balance mutation for deposits and withdrawals
//! - Insertion-ordered listing, mirroring on-disk iteration order
//!
//! Mutations here never touch storage; persistence is the caller's
//! (LedgerEngine's) responsibility.

use crate::types::{Account, AccountId, Amount, HolderName, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// In-memory map of account identifier to account state
///
/// Iteration order is insertion order, so a registry loaded from a
/// snapshot lists accounts in the order they appear on disk, and a saved
/// snapshot writes them back in the same order.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    /// Account state keyed by identifier
    accounts: HashMap<AccountId, Account>,
    /// Identifiers in insertion order
    order: Vec<AccountId>,
}

impl AccountRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert a fully-formed account, rejecting duplicates
    ///
    /// Used when replaying a snapshot (the stored balance is preserved)
    /// and by [`create`](AccountRegistry::create).
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the identifier is already present;
    /// the existing account is left untouched.
    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.accounts.contains_key(&account.id) {
            return Err(LedgerError::duplicate_account(account.id.as_str()));
        }
        self.order.push(account.id.clone());
        self.accounts.insert(account.id.clone(), account);
        Ok(())
    }

    /// Create a new account with a zero balance
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the identifier is already present.
    pub fn create(&mut self, id: AccountId, holder: HolderName) -> Result<&Account, LedgerError> {
        let account = Account::new(id, holder);
        let key = account.id.clone();
        self.insert(account)?;
        Ok(&self.accounts[&key])
    }

    /// Look up an account by identifier
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent.
    pub fn get(&self, id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts
            .get(id)
            .ok_or_else(|| LedgerError::unknown_account(id.as_str()))
    }

    /// Apply a deposit to the in-memory balance
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent, or
    /// `InvalidInput` if adding the amount would overflow the balance.
    pub fn apply_deposit(&mut self, id: &AccountId, amount: Amount) -> Result<&Account, LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::unknown_account(id.as_str()))?;

        account.balance = account
            .balance
            .checked_add(amount.get())
            .ok_or_else(|| LedgerError::invalid_input("deposit would overflow balance"))?;

        Ok(account)
    }

    /// Apply a withdrawal to the in-memory balance
    ///
    /// The balance is left unchanged when the withdrawal is rejected.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent, or
    /// `InsufficientFunds` if the amount exceeds the current balance.
    pub fn apply_withdraw(
        &mut self,
        id: &AccountId,
        amount: Amount,
    ) -> Result<&Account, LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::unknown_account(id.as_str()))?;

        if amount.get() > account.balance {
            return Err(LedgerError::insufficient_funds(
                id.as_str(),
                account.balance,
                amount.get(),
            ));
        }

        account.balance -= amount.get();
        Ok(account)
    }

    /// Overwrite an account's balance with a journal-derived value
    ///
    /// Recovery-only hook, used when startup reconciliation detects that
    /// the snapshot balance disagrees with the journal.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent.
    pub fn set_balance(&mut self, id: &AccountId, balance: Decimal) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::unknown_account(id.as_str()))?;
        account.balance = balance;
        Ok(())
    }

    /// Iterate accounts in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().map(|id| &self.accounts[id])
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the registry holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
