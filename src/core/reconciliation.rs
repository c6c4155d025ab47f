//! Reconciliation
//!
//! Derives aggregate deposit/withdrawal totals per account from the
//! journal and verifies them against the registry's stored balance.
//!
//! Totals are computed by a full scan of the journal. That is O(journal
//! size) per call and is the scalability boundary of this engine; it is
//! acceptable at the target scale (personal/small-business ledger).

use crate::core::journal::TransactionJournal;
use crate::types::{Account, AccountId, TransactionKind};
use rust_decimal::Decimal;

/// Aggregate deposit and withdrawal totals for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateTotals {
    /// Sum of all deposit amounts
    pub deposits: Decimal,
    /// Sum of all withdrawal amounts
    pub withdrawals: Decimal,
}

impl AggregateTotals {
    /// The journal-derived balance: deposits minus withdrawals
    pub fn net(&self) -> Decimal {
        self.deposits - self.withdrawals
    }
}

/// Sum the journal entries of one account by kind
pub fn totals(journal: &TransactionJournal, id: &AccountId) -> AggregateTotals {
    let mut deposits = Decimal::ZERO;
    let mut withdrawals = Decimal::ZERO;

    for record in journal.entries_for(id) {
        match record.kind {
            TransactionKind::Deposit => deposits += record.amount.get(),
            TransactionKind::Withdraw => withdrawals += record.amount.get(),
        }
    }

    AggregateTotals {
        deposits,
        withdrawals,
    }
}

/// Check that an account's stored balance matches its journal history
///
/// Returns `true` when `deposits - withdrawals` over the account's journal
/// records equals the stored balance. A mismatch means the snapshot is
/// stale; the journal is authoritative and the balance must be rebuilt.
pub fn verify(account: &Account, journal: &TransactionJournal) -> bool {
    totals(journal, &account.id).net() == account.balance
}
