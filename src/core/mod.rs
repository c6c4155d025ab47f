//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `registry` - In-memory account state and balance mutation
//! - `journal` - Append-only transaction history
//! - `reconciliation` - Journal-derived totals and integrity verification
//! - `engine` - Orchestration and the two-phase durability protocol

pub mod engine;
pub mod journal;
pub mod reconciliation;
pub mod registry;

pub use engine::LedgerEngine;
pub use journal::TransactionJournal;
pub use reconciliation::AggregateTotals;
pub use registry::AccountRegistry;
