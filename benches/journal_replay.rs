//! Benchmark suite for journal replay and reconciliation
//!
//! Measures the cost of replaying the on-disk journal and of the O(journal)
//! aggregate-totals scan, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Synthetic journals are generated into a temporary directory: a mix of
//! deposits and withdrawals spread across 10 accounts.

use rust_decimal::Decimal;
use rust_ledger_engine::core::{reconciliation, TransactionJournal};
use rust_ledger_engine::io::JournalStore;
use rust_ledger_engine::types::{AccountId, Amount, TransactionKind};
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 10_000];

/// Write a synthetic journal of `len` records across 10 accounts.
fn synthetic_journal(dir: &TempDir, len: usize) -> PathBuf {
    let path = dir.path().join("transactions.txt");
    let mut contents = String::new();
    for i in 0..len {
        let account = format!("ACC{}", i % 10);
        let (kind, cents) = if i % 3 == 2 {
            ("Withdraw", 100 + (i % 50) as i64)
        } else {
            ("Deposit", 500 + (i % 250) as i64)
        };
        writeln!(
            contents,
            "{},{},{}.{:02}",
            account,
            kind,
            cents / 100,
            cents % 100
        )
        .unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Benchmark replaying the full journal file into memory
#[divan::bench(args = SIZES)]
fn journal_replay(bencher: divan::Bencher, len: usize) {
    let dir = TempDir::new().unwrap();
    let path = synthetic_journal(&dir, len);

    bencher.bench(|| {
        let (records, warnings) = JournalStore::new(&path).load().unwrap();
        assert!(warnings.is_empty());
        records.len()
    });
}

/// Benchmark the aggregate-totals scan over an in-memory journal
#[divan::bench(args = SIZES)]
fn reconciliation_totals(bencher: divan::Bencher, len: usize) {
    let dir = TempDir::new().unwrap();
    let store = JournalStore::new(dir.path().join("transactions.txt"));
    let (mut journal, _) = TransactionJournal::open(store).unwrap();

    let accounts: Vec<AccountId> = (0..10)
        .map(|i| AccountId::new(format!("ACC{}", i)).unwrap())
        .collect();
    for i in 0..len {
        let kind = if i % 3 == 2 {
            TransactionKind::Withdraw
        } else {
            TransactionKind::Deposit
        };
        journal
            .append(
                accounts[i % 10].clone(),
                kind,
                Amount::new(Decimal::new(100 + (i % 50) as i64, 2)).unwrap(),
            )
            .unwrap();
    }

    let target = accounts[0].clone();
    bencher.bench(|| reconciliation::totals(&journal, &target));
}
