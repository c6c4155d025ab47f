//! Journal store
//!
//! Durable append-only storage for transaction records, the authoritative
//! history of all deposits and withdrawals. Records are appended one line
//! at a time and never rewritten or reordered.
//!
//! # Durability
//!
//! Each append opens the file in append mode, writes one complete encoded
//! line, and fsyncs (`sync_data`) before returning. Once `append` returns
//! `Ok`, the record survives a crash.
//!
//! # Corruption policy
//!
//! Replay skips unparsable lines instead of aborting the whole load: each
//! skipped line is logged and collected as a `CorruptFormat` warning
//! returned alongside the successfully parsed records. This keeps the
//! ledger usable after partial corruption.

use crate::io::line_format::{encode_journal_row, parse_journal_row, JournalRow};
use crate::types::{LedgerError, TransactionRecord};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Durable append-only store for the transaction journal
///
/// The only component permitted to open handles on the journal file.
#[derive(Debug)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Create a store backed by the given journal file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JournalStore { path: path.into() }
    }

    /// Path of the backing journal file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Durably append one record to the journal
    ///
    /// The record is encoded to a complete line in memory first, then
    /// written with a single `write_all` and fsynced. Prior records are
    /// never touched.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` if the journal file cannot be opened,
    /// written, or fsynced.
    pub fn append(&self, record: &TransactionRecord) -> Result<(), LedgerError> {
        let mut buf = Vec::new();
        {
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut buf);
            writer.serialize(encode_journal_row(record))?;
            writer.flush().map_err(LedgerError::from)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(&buf)?;
        file.sync_data()?;

        Ok(())
    }

    /// Replay the full journal in write order
    ///
    /// An absent file is treated as an empty journal, not an error.
    /// Unparsable lines are skipped, logged, and returned as `CorruptFormat`
    /// warnings alongside the successfully parsed records.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceFailure` only on I/O errors; per-line parse
    /// failures are non-fatal.
    pub fn load(&self) -> Result<(Vec<TransactionRecord>, Vec<LedgerError>), LedgerError> {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        if !self.path.exists() {
            return Ok((records, warnings));
        }

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(file);

        for (idx, result) in reader.deserialize::<JournalRow>().enumerate() {
            let line = idx as u64 + 1;
            let row = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(LedgerError::from(e)),
                Err(e) => {
                    let warning = LedgerError::from(e);
                    warn!(%warning, line, "skipping corrupt journal line");
                    warnings.push(warning);
                    continue;
                }
            };

            match parse_journal_row(row, line) {
                Ok(record) => records.push(record),
                Err(warning) => {
                    warn!(%warning, line, "skipping corrupt journal line");
                    warnings.push(warning);
                }
            }
        }

        Ok((records, warnings))
    }
}
