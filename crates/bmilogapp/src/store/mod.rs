//! # Storage Layer
//!
//! Two levels:
//!
//! 1. [`backend::StorageBackend`]: a key-value byte store (`get`, `set`, `with_lock`).
//!    It knows nothing about records.
//! 2. [`RecordStore`]: the record collection, kept as one serialized JSON array under the
//!    single key [`RECORDS_KEY`].
//!
//! ## Whole-Blob Semantics
//!
//! There is no index and no partial update. Every operation loads the full list, changes
//! it in memory, and writes the full list back. Lookups by id are linear scans. Nothing is
//! cached between calls, so each operation sees whatever the last writer left.
//!
//! Read-modify-write operations (`append`, `remove`, `clear`) run inside
//! [`backend::StorageBackend::with_lock`], which for [`fs_backend::FsBackend`] is a lock
//! file next to the data. Combined with atomic writes this keeps two terminals sharing
//! one data directory from losing records.
//!
//! ## Corrupt Data
//!
//! If the stored bytes do not decode, [`RecordStore::load_all`] fails with
//! [`BmiError::CorruptData`]. Callers never see a silently emptied history. [`RecordStore::clear`]
//! does not read the old value, so it is always available as the way out.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one file per key in the data directory.
//! - [`mem_backend::MemBackend`]: tests, no filesystem.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── bmi_records.json    # The record collection
//! ├── bmi_records.lock    # Present only while a write is in progress
//! └── bmilog.toml         # Configuration (when --data points here)
//! ```

use crate::error::{BmiError, Result};
use crate::model::Record;
use backend::StorageBackend;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub const RECORDS_KEY: &str = "bmi_records";

pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Absent blob reads as an empty collection; undecodable bytes are `CorruptData`.
    pub fn load_all(&self) -> Result<Vec<Record>> {
        let Some(bytes) = self.backend.get(RECORDS_KEY)? else {
            debug!("No stored records yet");
            return Ok(Vec::new());
        };
        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(BmiError::CorruptData)?;
        debug!("Loaded {} records", records.len());
        Ok(records)
    }

    /// Overwrites the stored collection unconditionally.
    pub fn save_all(&mut self, records: &[Record]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.backend.set(RECORDS_KEY, &bytes)
    }

    pub fn append(
        &mut self,
        weight_kg: f64,
        height_cm: f64,
        bmi: f64,
        category: &str,
    ) -> Result<Record> {
        self.append_at(Utc::now(), weight_kg, height_cm, bmi, category)
    }

    /// Like [`append`](Self::append) with an explicit creation time.
    pub fn append_at(
        &mut self,
        date: DateTime<Utc>,
        weight_kg: f64,
        height_cm: f64,
        bmi: f64,
        category: &str,
    ) -> Result<Record> {
        let backend = &self.backend;
        backend.with_lock(RECORDS_KEY, || {
            let mut records = self.load_all()?;
            let record = Record::new(
                next_id(&records, date),
                date,
                weight_kg,
                height_cm,
                bmi,
                category,
            );
            records.push(record.clone());
            let bytes = serde_json::to_vec_pretty(&records)?;
            backend.set(RECORDS_KEY, &bytes)?;
            info!("Recorded {} (bmi {:.2})", record.id, record.bmi);
            Ok(record)
        })
    }

    /// Removes the record with exactly this id. Returns false, and writes nothing,
    /// when no such record exists.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let backend = &self.backend;
        backend.with_lock(RECORDS_KEY, || {
            let records = self.load_all()?;
            let before = records.len();
            let remaining: Vec<Record> = records.into_iter().filter(|r| r.id != id).collect();
            if remaining.len() == before {
                debug!("No record with id {}", id);
                return Ok(false);
            }
            let bytes = serde_json::to_vec_pretty(&remaining)?;
            backend.set(RECORDS_KEY, &bytes)?;
            info!("Removed record {}", id);
            Ok(true)
        })
    }

    pub fn clear(&mut self) -> Result<()> {
        let backend = &self.backend;
        backend.with_lock(RECORDS_KEY, || {
            let bytes = serde_json::to_vec_pretty(&Vec::<Record>::new())?;
            backend.set(RECORDS_KEY, &bytes)?;
            info!("Cleared all records");
            Ok(())
        })
    }
}

/// Creation time in milliseconds, bumped past any id already taken.
fn next_id(records: &[Record], date: DateTime<Utc>) -> String {
    let mut candidate = date.timestamp_millis();
    while records.iter().any(|r| r.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
