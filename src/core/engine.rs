//! Ledger engine
//!
//! This module provides the `LedgerEngine`, the orchestrator composing the
//! account registry, the transaction journal, and the snapshot store into
//! the collaborator-facing operations.
//!
//! # Two-phase mutation protocol
//!
//! Every mutating operation follows a fixed protocol that bounds the
//! inconsistency window between the in-memory registry, the durable
//! snapshot, and the durable journal:
//!
//! 1. Validate inputs and in-memory preconditions (existence, sufficient
//!    funds) - no durable write yet.
//! 2. Durably append the record to the journal. This is the durability
//!    point: once this step succeeds the transaction has happened and is
//!    irreversible (reversal requires a new opposite-kind transaction).
//! 3. Apply the in-memory registry mutation, then persist the snapshot.
//!
//! If step 3 fails or the process crashes between steps 2 and 3 the
//! snapshot is stale. That is recoverable: the journal is authoritative,
//! and [`LedgerEngine::open`] detects the mismatch and rebuilds the
//! balance from the journal instead of trusting the stale snapshot.
//!
//! Account creation is single-phase (snapshot only) - creating an account
//! is not a financial event and leaves no journal record.

use crate::core::journal::TransactionJournal;
use crate::core::reconciliation::{self, AggregateTotals};
use crate::core::registry::AccountRegistry;
use crate::io::{JournalStore, LedgerPaths, SnapshotStore};
use crate::types::{
    Account, AccountId, Amount, HolderName, LedgerError, TransactionKind, TransactionRecord,
};
use std::collections::HashSet;
use tracing::warn;

/// The ledger engine
///
/// Exclusively owns the in-memory registry and the in-memory journal tail
/// for the process lifetime. Constructed once at startup and passed by
/// reference to callers; there are no ambient globals.
///
/// Mutating operations take `&mut self`, so in-process writers are
/// serialized by the borrow rules; read-only operations take `&self` and
/// never block on persistence.
#[derive(Debug)]
pub struct LedgerEngine {
    registry: AccountRegistry,
    journal: TransactionJournal,
    snapshot: SnapshotStore,
    recovery_warnings: Vec<LedgerError>,
}

impl LedgerEngine {
    /// Open the ledger, recovering from a stale snapshot if needed
    ///
    /// Loads the snapshot and replays the journal, then reconciles every
    /// account: a balance that disagrees with its journal-derived total is
    /// rebuilt from the journal (and the repaired snapshot persisted).
    /// Corrupt journal lines and detected inconsistencies are retained as
    /// warnings, available via
    /// [`recovery_warnings`](LedgerEngine::recovery_warnings).
    ///
    /// # Errors
    ///
    /// Returns `CorruptFormat` if the snapshot itself cannot be parsed, or
    /// `PersistenceFailure` on I/O errors.
    pub fn open(paths: LedgerPaths) -> Result<Self, LedgerError> {
        let snapshot = SnapshotStore::new(paths.snapshot);
        let mut registry = snapshot.load()?;

        let (journal, mut warnings) = TransactionJournal::open(JournalStore::new(paths.journal))?;

        // Journal rows for accounts missing from the snapshot: the
        // registry is authoritative for existence, so these are reported
        // and excluded from the rebuild.
        {
            let mut orphaned: HashSet<&AccountId> = HashSet::new();
            for record in journal.iter() {
                if registry.get(&record.account).is_err() && orphaned.insert(&record.account) {
                    let warning = LedgerError::unknown_account(record.account.as_str());
                    warn!(account = %record.account, "journal references account missing from snapshot");
                    warnings.push(warning);
                }
            }
        }

        // Verify every account against the journal; the journal wins.
        let mut stale: Vec<(AccountId, rust_decimal::Decimal, LedgerError)> = Vec::new();
        for account in registry.list() {
            if !reconciliation::verify(account, &journal) {
                let derived = reconciliation::totals(&journal, &account.id).net();
                let warning = LedgerError::ledger_inconsistent(
                    account.id.as_str(),
                    account.balance,
                    derived,
                );
                stale.push((account.id.clone(), derived, warning));
            }
        }

        let must_repair = !stale.is_empty();
        for (id, derived, warning) in stale {
            warn!(%warning, "rebuilding balance from journal");
            registry.set_balance(&id, derived)?;
            warnings.push(warning);
        }

        if must_repair {
            snapshot.save(&registry)?;
        }

        Ok(LedgerEngine {
            registry,
            journal,
            snapshot,
            recovery_warnings: warnings,
        })
    }

    /// Warnings collected while opening: skipped journal lines, orphaned
    /// journal records, and rebuilt balances
    pub fn recovery_warnings(&self) -> &[LedgerError] {
        &self.recovery_warnings
    }

    /// Create a new account with a zero balance
    ///
    /// Single-phase: the registry is updated and the snapshot persisted;
    /// no journal record is written.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the identifier is already registered
    /// (the existing account is untouched), or `PersistenceFailure` if the
    /// snapshot cannot be saved.
    pub fn create_account(
        &mut self,
        id: AccountId,
        holder: HolderName,
    ) -> Result<Account, LedgerError> {
        let account = self.registry.create(id, holder)?.clone();
        self.snapshot.save(&self.registry)?;
        Ok(account)
    }

    /// Deposit funds into an account
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent, or
    /// `PersistenceFailure` if a durable write fails. A failed snapshot
    /// save after the journal append does not roll back the deposit.
    pub fn deposit(&mut self, id: &AccountId, amount: Amount) -> Result<Account, LedgerError> {
        // Phase 1: preconditions, no durable write.
        self.registry.get(id)?;

        // Phase 2: durability point.
        self.journal
            .append(id.clone(), TransactionKind::Deposit, amount)?;

        // Phase 3: in-memory mutation, then snapshot.
        let account = self.registry.apply_deposit(id, amount)?.clone();
        self.snapshot.save(&self.registry)?;

        Ok(account)
    }

    /// Withdraw funds from an account
    ///
    /// Sufficient funds are checked before anything is journaled, so a
    /// rejected withdrawal leaves both stores untouched and the balance
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent,
    /// `InsufficientFunds` if the amount exceeds the current balance, or
    /// `PersistenceFailure` if a durable write fails.
    pub fn withdraw(&mut self, id: &AccountId, amount: Amount) -> Result<Account, LedgerError> {
        // Phase 1: preconditions, no durable write.
        let current = self.registry.get(id)?;
        if amount.get() > current.balance {
            return Err(LedgerError::insufficient_funds(
                id.as_str(),
                current.balance,
                amount.get(),
            ));
        }

        // Phase 2: durability point.
        self.journal
            .append(id.clone(), TransactionKind::Withdraw, amount)?;

        // Phase 3: in-memory mutation, then snapshot.
        let account = self.registry.apply_withdraw(id, amount)?.clone();
        self.snapshot.save(&self.registry)?;

        Ok(account)
    }

    /// Look up an account and its current balance
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent.
    pub fn balance_of(&self, id: &AccountId) -> Result<Account, LedgerError> {
        self.registry.get(id).cloned()
    }

    /// All accounts in insertion order
    pub fn list_accounts(&self) -> Vec<Account> {
        self.registry.list().cloned().collect()
    }

    /// All journal records for one account, in original write order
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent.
    pub fn transactions_of(&self, id: &AccountId) -> Result<Vec<TransactionRecord>, LedgerError> {
        self.registry.get(id)?;
        Ok(self.journal.entries_for(id).cloned().collect())
    }

    /// Aggregate deposit and withdrawal totals for one account
    ///
    /// # Errors
    ///
    /// Returns `UnknownAccount` if the identifier is absent.
    pub fn aggregate_totals(&self, id: &AccountId) -> Result<AggregateTotals, LedgerError> {
        self.registry.get(id)?;
        Ok(reconciliation::totals(&self.journal, id))
    }
}
