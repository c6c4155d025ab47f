//! Line format handling for the snapshot and journal stores
//!
//! This module centralizes all on-disk format concerns, providing:
//! - Row structures for (de)serialization of both stores
//! - Conversion between rows and validated domain types
//!
//! Both stores are plain sequential text, one CSV record per line, no
//! header. Snapshot rows are `account_id,holder_name,balance`; journal
//! rows are `account_id,kind,amount` with `kind` one of the exact literal
//! strings `Deposit` / `Withdraw`.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{
    Account, AccountId, Amount, HolderName, LedgerError, TransactionKind, TransactionRecord,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One snapshot store line: `account_id,holder_name,balance`
///
/// Numeric fields stay as strings at this layer so parse failures can be
/// reported with the offending text and line number.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SnapshotRow {
    pub account: String,
    pub holder: String,
    pub balance: String,
}

/// One journal store line: `account_id,kind,amount`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JournalRow {
    pub account: String,
    pub kind: String,
    pub amount: String,
}

/// Convert a SnapshotRow into a validated Account
///
/// # Arguments
///
/// * `row` - The deserialized snapshot row
/// * `line` - Line number in the snapshot store, for error reporting
///
/// # Errors
///
/// Returns `CorruptFormat` if the identifier or holder name is empty, the
/// balance does not parse as a decimal, or the balance is negative.
pub fn parse_snapshot_row(row: SnapshotRow, line: u64) -> Result<Account, LedgerError> {
    let id = AccountId::new(row.account)
        .map_err(|_| LedgerError::corrupt_format(Some(line), "empty account identifier"))?;

    let holder = HolderName::new(row.holder)
        .map_err(|_| LedgerError::corrupt_format(Some(line), "empty holder name"))?;

    let balance = Decimal::from_str(row.balance.trim()).map_err(|_| {
        LedgerError::corrupt_format(Some(line), format!("invalid balance '{}'", row.balance))
    })?;

    if balance < Decimal::ZERO {
        return Err(LedgerError::corrupt_format(
            Some(line),
            format!("negative balance '{}'", row.balance),
        ));
    }

    Ok(Account {
        id,
        holder,
        balance,
    })
}

/// Encode an Account as a snapshot row
///
/// The balance is written with two decimal places.
pub fn encode_snapshot_row(account: &Account) -> SnapshotRow {
    SnapshotRow {
        account: account.id.as_str().to_string(),
        holder: account.holder.as_str().to_string(),
        balance: format!("{:.2}", account.balance),
    }
}

/// Convert a JournalRow into a validated TransactionRecord
///
/// # Arguments
///
/// * `row` - The deserialized journal row
/// * `line` - Line number in the journal store, for error reporting
///
/// # Errors
///
/// Returns `CorruptFormat` if the identifier is empty, the kind is not one
/// of the exact literals `Deposit` / `Withdraw`, or the amount does not
/// parse as a positive two-decimal value.
pub fn parse_journal_row(row: JournalRow, line: u64) -> Result<TransactionRecord, LedgerError> {
    let account = AccountId::new(row.account)
        .map_err(|_| LedgerError::corrupt_format(Some(line), "empty account identifier"))?;

    let kind = match row.kind.trim() {
        "Deposit" => TransactionKind::Deposit,
        "Withdraw" => TransactionKind::Withdraw,
        other => {
            return Err(LedgerError::corrupt_format(
                Some(line),
                format!("invalid transaction kind '{}'", other),
            ))
        }
    };

    let value = Decimal::from_str(row.amount.trim()).map_err(|_| {
        LedgerError::corrupt_format(Some(line), format!("invalid amount '{}'", row.amount))
    })?;

    let amount = Amount::new(value).map_err(|_| {
        LedgerError::corrupt_format(Some(line), format!("non-positive amount '{}'", row.amount))
    })?;

    Ok(TransactionRecord {
        account,
        kind,
        amount,
    })
}

/// Encode a TransactionRecord as a journal row
pub fn encode_journal_row(record: &TransactionRecord) -> JournalRow {
    JournalRow {
        account: record.account.as_str().to_string(),
        kind: record.kind.to_string(),
        amount: format!("{:.2}", record.amount.get()),
    }
}
