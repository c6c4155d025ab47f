//! Transaction journal
//!
//! This module provides the `TransactionJournal`, a thin append-only
//! wrapper over the journal store. It owns the in-memory tail of the
//! journal for the current process lifetime and enforces the append-only
//! discipline: records are appended once and never mutated or removed.

use crate::io::JournalStore;
use crate::types::{AccountId, Amount, LedgerError, TransactionKind, TransactionRecord};

/// Append-only ordered log of transaction records
///
/// Source of truth for historical activity. The full journal is replayed
/// into memory at open so per-account iteration never re-reads the file.
#[derive(Debug)]
pub struct TransactionJournal {
    store: JournalStore,
    records: Vec<TransactionRecord>,
}

impl TransactionJournal {
    /// Open the journal, replaying the backing store into memory
    ///
    /// Returns the journal together with the `CorruptFormat` warnings for
    /// any skipped lines.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the store cannot be read.
    pub fn open(store: JournalStore) -> Result<(Self, Vec<LedgerError>), LedgerError> {
        let (records, warnings) = store.load()?;
        Ok((TransactionJournal { store, records }, warnings))
    }

    /// Durably append one record and return it
    ///
    /// The store append is the durability point: once it succeeds the
    /// record is permanent. The in-memory tail is extended only after the
    /// durable write.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the durable append fails; the
    /// in-memory tail is left unchanged in that case.
    pub fn append(
        &mut self,
        account: AccountId,
        kind: TransactionKind,
        amount: Amount,
    ) -> Result<TransactionRecord, LedgerError> {
        let record = TransactionRecord {
            account,
            kind,
            amount,
        };

        self.store.append(&record)?;
        self.records.push(record.clone());

        Ok(record)
    }

    /// Iterate the records of one account in original write order
    ///
    /// Restartable: each call produces a fresh iterator, bounded by the
    /// journal size at call time.
    pub fn entries_for<'a>(
        &'a self,
        id: &'a AccountId,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.records.iter().filter(move |r| &r.account == id)
    }

    /// Iterate all records in write order
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
