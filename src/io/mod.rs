//! I/O module
//!
//! Owns the on-disk representations of the ledger: the snapshot store and
//! the journal store are the only components permitted to open storage
//! handles.
//!
//! # Components
//!
//! - `line_format` - pure line-level encode/decode shared by both stores
//! - `snapshot` - atomic load/save of the account registry snapshot
//! - `journal_store` - durable append and tolerant replay of the journal

pub mod journal_store;
pub mod line_format;
pub mod snapshot;

pub use journal_store::JournalStore;
pub use snapshot::SnapshotStore;

use std::path::{Path, PathBuf};

/// Default snapshot store file name
pub const SNAPSHOT_FILE: &str = "accounts.txt";

/// Default journal store file name
pub const JOURNAL_FILE: &str = "transactions.txt";

/// Locations of the two ledger stores
///
/// Both stores normally live side by side in one data directory; see
/// [`LedgerPaths::in_dir`].
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Path of the account registry snapshot file
    pub snapshot: PathBuf,
    /// Path of the transaction journal file
    pub journal: PathBuf,
}

impl LedgerPaths {
    /// Place both stores in the given directory under their default names
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        LedgerPaths {
            snapshot: dir.join(SNAPSHOT_FILE),
            journal: dir.join(JOURNAL_FILE),
        }
    }
}
