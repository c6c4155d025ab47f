//! End-to-end integration tests
//!
//! These tests exercise the full ledger engine against real on-disk stores
//! in a temporary directory: account lifecycle, the two-phase durability
//! protocol, restart behavior, and recovery from stale snapshots and
//! corrupt journal lines.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_ledger_engine::io::{JournalStore, LedgerPaths, SnapshotStore};
    use rust_ledger_engine::types::{
        AccountId, Amount, HolderName, LedgerError, TransactionKind, TransactionRecord,
    };
    use rust_ledger_engine::LedgerEngine;
    use std::fs;
    use tempfile::TempDir;

    fn id(s: &str) -> AccountId {
        AccountId::new(s).unwrap()
    }

    fn holder(s: &str) -> HolderName {
        HolderName::new(s).unwrap()
    }

    fn amount(cents: i64) -> Amount {
        Amount::new(Decimal::new(cents, 2)).unwrap()
    }

    fn open(dir: &TempDir) -> LedgerEngine {
        LedgerEngine::open(LedgerPaths::in_dir(dir.path())).unwrap()
    }

    /// The concrete scenario from the requirements: create A1/Alice,
    /// deposit 100.00, withdraw 40.00, reject a 1000.00 withdrawal, and
    /// check aggregate totals.
    #[test]
    fn test_alice_scenario() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);

        engine.create_account(id("A1"), holder("Alice")).unwrap();

        let account = engine.deposit(&id("A1"), amount(10000)).unwrap();
        assert_eq!(account.balance, Decimal::new(10000, 2));

        let account = engine.withdraw(&id("A1"), amount(4000)).unwrap();
        assert_eq!(account.balance, Decimal::new(6000, 2));

        let result = engine.withdraw(&id("A1"), amount(100000));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(6000, 2)
        );

        let totals = engine.aggregate_totals(&id("A1")).unwrap();
        assert_eq!(totals.deposits, Decimal::new(10000, 2));
        assert_eq!(totals.withdrawals, Decimal::new(4000, 2));
    }

    /// Non-positive deposit amounts are rejected at construction and the
    /// balance stays unchanged.
    #[rstest]
    #[case::negative(Decimal::new(-500, 2))]
    #[case::zero(Decimal::ZERO)]
    fn test_non_positive_amounts_rejected(#[case] value: Decimal) {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        engine.create_account(id("A1"), holder("Alice")).unwrap();
        engine.deposit(&id("A1"), amount(10000)).unwrap();

        let result = Amount::new(value);
        assert!(matches!(result, Err(LedgerError::InvalidInput { .. })));

        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(10000, 2)
        );
        assert_eq!(engine.transactions_of(&id("A1")).unwrap().len(), 1);
    }

    /// Every operation on a never-created identifier fails UnknownAccount.
    #[test]
    fn test_unknown_account_everywhere() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);

        let zz = id("ZZ");
        assert!(matches!(
            engine.deposit(&zz, amount(100)),
            Err(LedgerError::UnknownAccount { .. })
        ));
        assert!(matches!(
            engine.withdraw(&zz, amount(100)),
            Err(LedgerError::UnknownAccount { .. })
        ));
        assert!(matches!(
            engine.balance_of(&zz),
            Err(LedgerError::UnknownAccount { .. })
        ));
    }

    /// Balance always equals journal-derived deposits minus withdrawals,
    /// across an arbitrary mix of accepted and rejected operations.
    #[test]
    fn test_balance_matches_journal_totals() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        engine.create_account(id("A1"), holder("Alice")).unwrap();

        let operations: &[(TransactionKind, i64)] = &[
            (TransactionKind::Deposit, 12500),
            (TransactionKind::Withdraw, 500),
            (TransactionKind::Deposit, 999),
            (TransactionKind::Withdraw, 100000), // rejected
            (TransactionKind::Withdraw, 12000),
            (TransactionKind::Deposit, 1),
        ];

        for (kind, cents) in operations {
            let result = match kind {
                TransactionKind::Deposit => engine.deposit(&id("A1"), amount(*cents)),
                TransactionKind::Withdraw => engine.withdraw(&id("A1"), amount(*cents)),
            };
            if *cents == 100000 {
                assert!(result.is_err());
            } else {
                assert!(result.is_ok());
            }
        }

        let totals = engine.aggregate_totals(&id("A1")).unwrap();
        let balance = engine.balance_of(&id("A1")).unwrap().balance;
        assert_eq!(balance, totals.deposits - totals.withdrawals);
        assert_eq!(balance, Decimal::new(1000, 2));
    }

    /// Persist, restart, and observe identical state: balances, listing
    /// order, and the exact journal records in append order.
    #[test]
    fn test_restart_round_trips_state() {
        let dir = TempDir::new().unwrap();
        {
            let mut engine = open(&dir);
            engine.create_account(id("B2"), holder("Bob")).unwrap();
            engine.create_account(id("A1"), holder("Alice")).unwrap();
            engine.deposit(&id("A1"), amount(10000)).unwrap();
            engine.deposit(&id("B2"), amount(2500)).unwrap();
            engine.withdraw(&id("A1"), amount(4000)).unwrap();
        }

        let engine = open(&dir);
        assert!(engine.recovery_warnings().is_empty());

        let accounts = engine.list_accounts();
        let ids: Vec<&str> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["B2", "A1"]);
        assert_eq!(accounts[0].balance, Decimal::new(2500, 2));
        assert_eq!(accounts[1].balance, Decimal::new(6000, 2));

        let records = engine.transactions_of(&id("A1")).unwrap();
        assert_eq!(
            records,
            vec![
                TransactionRecord {
                    account: id("A1"),
                    kind: TransactionKind::Deposit,
                    amount: amount(10000),
                },
                TransactionRecord {
                    account: id("A1"),
                    kind: TransactionKind::Withdraw,
                    amount: amount(4000),
                },
            ]
        );
    }

    /// Simulated crash between journal append and snapshot save: the
    /// journal gains a record the snapshot never saw. On restart the
    /// mismatch is detected and the balance rebuilt from the journal, not
    /// the stale snapshot.
    #[test]
    fn test_crash_between_journal_and_snapshot_recovers() {
        let dir = TempDir::new().unwrap();
        {
            let mut engine = open(&dir);
            engine.create_account(id("A1"), holder("Alice")).unwrap();
            engine.deposit(&id("A1"), amount(10000)).unwrap();
        }

        let journal = JournalStore::new(dir.path().join("transactions.txt"));
        journal
            .append(&TransactionRecord {
                account: id("A1"),
                kind: TransactionKind::Withdraw,
                amount: amount(4000),
            })
            .unwrap();

        let engine = open(&dir);

        assert!(engine.recovery_warnings().iter().any(|w| matches!(
            w,
            LedgerError::LedgerInconsistent { .. }
        )));
        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(6000, 2)
        );

        // The repaired snapshot was persisted, so the next open is clean.
        let engine = open(&dir);
        assert!(engine.recovery_warnings().is_empty());
        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(6000, 2)
        );
    }

    /// A snapshot edited behind the engine's back is likewise overridden
    /// by the journal on the next open.
    #[test]
    fn test_tampered_snapshot_overridden_by_journal() {
        let dir = TempDir::new().unwrap();
        {
            let mut engine = open(&dir);
            engine.create_account(id("A1"), holder("Alice")).unwrap();
            engine.deposit(&id("A1"), amount(10000)).unwrap();
        }

        fs::write(dir.path().join("accounts.txt"), "A1,Alice,999999.00\n").unwrap();

        let engine = open(&dir);
        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(10000, 2)
        );
    }

    /// Corrupt journal lines are skipped with warnings; the remaining
    /// records still reconstruct the balance and the engine stays usable.
    #[test]
    fn test_corrupt_journal_line_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        {
            let mut engine = open(&dir);
            engine.create_account(id("A1"), holder("Alice")).unwrap();
            engine.deposit(&id("A1"), amount(10000)).unwrap();
            engine.withdraw(&id("A1"), amount(4000)).unwrap();
        }

        let journal_path = dir.path().join("transactions.txt");
        let mut contents = fs::read_to_string(&journal_path).unwrap();
        contents.push_str("this line is garbage\n");
        fs::write(&journal_path, contents).unwrap();

        let mut engine = open(&dir);

        assert!(engine.recovery_warnings().iter().any(|w| matches!(
            w,
            LedgerError::CorruptFormat { .. }
        )));
        assert_eq!(
            engine.balance_of(&id("A1")).unwrap().balance,
            Decimal::new(6000, 2)
        );

        // Still usable after partial corruption.
        let account = engine.deposit(&id("A1"), amount(100)).unwrap();
        assert_eq!(account.balance, Decimal::new(6100, 2));
    }

    /// The snapshot store file format is one `account,holder,balance`
    /// line per account; the journal is one `account,kind,amount` line
    /// per record with exact kind literals.
    #[test]
    fn test_on_disk_formats() {
        let dir = TempDir::new().unwrap();
        let mut engine = open(&dir);
        engine.create_account(id("A1"), holder("Alice")).unwrap();
        engine.deposit(&id("A1"), amount(10000)).unwrap();
        engine.withdraw(&id("A1"), amount(4000)).unwrap();

        let snapshot = fs::read_to_string(dir.path().join("accounts.txt")).unwrap();
        assert_eq!(snapshot, "A1,Alice,60.00\n");

        let journal = fs::read_to_string(dir.path().join("transactions.txt")).unwrap();
        assert_eq!(journal, "A1,Deposit,100.00\nA1,Withdraw,40.00\n");
    }

    /// Saving and reloading a registry round-trips exactly, including
    /// multiple accounts and zero balances.
    #[test]
    fn test_snapshot_store_round_trip() {
        let dir = TempDir::new().unwrap();
        {
            let mut engine = open(&dir);
            engine.create_account(id("A1"), holder("Alice")).unwrap();
            engine.create_account(id("B2"), holder("Bob")).unwrap();
            engine.deposit(&id("A1"), amount(12345)).unwrap();
        }

        let store = SnapshotStore::new(dir.path().join("accounts.txt"));
        let registry = store.load().unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(&id("A1")).unwrap().balance,
            Decimal::new(12345, 2)
        );
        assert_eq!(registry.get(&id("B2")).unwrap().balance, Decimal::ZERO);
    }
}
