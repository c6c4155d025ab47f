//! Snapshot store
//!
//! Durable storage for the account registry snapshot. The snapshot is a
//! cache of derived state (the journal is the authoritative history), but
//! it is persisted so the full journal need not be replayed on every start.
//!
//! # Atomicity
//!
//! `save` writes the full snapshot to a temporary file in the same
//! directory, fsyncs it, and atomically renames it over the previous
//! snapshot. A crash-interrupted save therefore never leaves a torn
//! snapshot: readers observe either the old file or the new one, complete.

use crate::core::registry::AccountRegistry;
use crate::io::line_format::{encode_snapshot_row, parse_snapshot_row, SnapshotRow};
use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Durable store for the account registry snapshot
///
/// The only component permitted to open handles on the snapshot file.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given snapshot file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    /// Path of the backing snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the registry snapshot from disk
    ///
    /// An absent file is treated as an empty registry, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CorruptFormat` if any stored line cannot be parsed into
    /// (identifier, name, balance), or `PersistenceFailure` on I/O errors.
    pub fn load(&self) -> Result<AccountRegistry, LedgerError> {
        let mut registry = AccountRegistry::new();

        if !self.path.exists() {
            return Ok(registry);
        }

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(file);

        for (idx, result) in reader.deserialize::<SnapshotRow>().enumerate() {
            let line = idx as u64 + 1;
            let row = result?;
            let account = parse_snapshot_row(row, line)?;
            registry.insert(account).map_err(|_| {
                LedgerError::corrupt_format(Some(line), "duplicate account identifier in snapshot")
            })?;
        }

        Ok(registry)
    }

    /// Atomically persist the full registry snapshot
    ///
    /// Accounts are written in registry iteration order (insertion order),
    /// one line per account, balance with two decimal places.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the temporary file cannot be
    /// written, fsynced, or renamed into place.
    pub fn save(&self, registry: &AccountRegistry) -> Result<(), LedgerError> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;

        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());

            for account in registry.list() {
                writer.serialize(encode_snapshot_row(account))?;
            }

            writer.flush().map_err(LedgerError::from)?;
        }

        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| LedgerError::persistence_failure(e.to_string()))?;

        Ok(())
    }
}
