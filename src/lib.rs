//! Ledger Engine Library
//! # Overview
//!
//! This library maintains a set of financial accounts and an append-only
//! record of deposit/withdraw events, persisting both durably across
//! process restarts and keeping them mutually consistent.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransactionRecord, validated
//!   identifiers and amounts, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Persistence layer: the snapshot store (atomic replace) and
//!   the journal store (durable append, tolerant replay)
//! - [`core`] - Business logic components:
//!   - [`core::registry`] - In-memory account state and balance operations
//!   - [`core::journal`] - Append-only transaction history
//!   - [`core::reconciliation`] - Journal-derived totals and verification
//!   - [`core::engine`] - Operation orchestration and durability protocol
//!
//! # Durability Contract
//!
//! Mutating operations are two-phase: the transaction record is first
//! appended durably to the journal (the durability point), then the
//! in-memory registry is updated and the snapshot atomically replaced. If
//! the process crashes between the two writes, the next open detects the
//! stale snapshot by reconciling every balance against the journal and
//! rebuilds from the journal, which is authoritative.
//!
//! # Account States
//!
//! Each account maintains:
//! - `id`: unique caller-supplied identifier (non-empty)
//! - `holder`: account holder's name (non-empty)
//! - `balance`: current balance (never negative, two-decimal precision)

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{AccountRegistry, AggregateTotals, LedgerEngine, TransactionJournal};
pub use io::{JournalStore, LedgerPaths, SnapshotStore};
pub use types::{
    Account, AccountId, Amount, HolderName, LedgerError, TransactionKind, TransactionRecord,
};
