//! JSON-backed implementation of the record store.
//!
//! # Responsibility
//! - Read the full `username -> record` map from one JSON file.
//! - Overwrite the file with a serialized map in a single step.
//! - Emit `store_load`/`store_save` logging events with duration and status.
//!
//! # Invariants
//! - Key order on disk is deterministic (`BTreeMap`).
//! - `load` fails on an absent file; only `load_or_default` treats absence
//!   as an empty collection.

use super::{StoreError, StoreResult};
use crate::model::record::StudentRecord;
use log::{error, info};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The full persisted collection, keyed by username.
pub type RecordMap = BTreeMap<String, StudentRecord>;

/// Whole-file JSON store for student records.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full record collection from the backing file.
    ///
    /// # Errors
    /// - `StoreError::Io` when the file is absent or unreadable.
    /// - `StoreError::Malformed` when the contents do not parse as the
    ///   expected `username -> record` shape.
    pub fn load(&self) -> StoreResult<RecordMap> {
        let started_at = Instant::now();
        match self.read_map() {
            Ok(records) => {
                info!(
                    "event=store_load module=store status=ok path={} records={} duration_ms={}",
                    self.path.display(),
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Loads the collection, treating an absent file as empty.
    ///
    /// Used on the backup path, which is what creates the file in the first
    /// place. Read and parse failures on an existing file still error.
    pub fn load_or_default(&self) -> StoreResult<RecordMap> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok path={} records=0 note=absent_file",
                    self.path.display()
                );
                Ok(RecordMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Serializes the collection and overwrites the backing file in one step.
    pub fn save(&self, records: &RecordMap) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_map(records) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} records={} duration_ms={}",
                    self.path.display(),
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_map(&self) -> StoreResult<RecordMap> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(&self, records: &RecordMap) -> StoreResult<()> {
        let serialized = serde_json::to_string(records)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}
