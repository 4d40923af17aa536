//! Record Store
//!
//! The authoritative, insertion-ordered list of teacher records.
//!
//! ## Responsibilities
//! - Assign ids and timestamps on creation
//! - Apply patches, bulk status changes and deletions
//! - Persist the full list after every change
//! - Rehydrate from the storage slot on open
//!
//! ## Persistence Contract
//! After each mutation the whole list is serialized as a JSON array and
//! written under one fixed key. Storage failures never reach the caller:
//! unreadable data opens as an empty store, failed writes are logged and the
//! in-memory change stands.

use std::collections::HashSet;

use tracing::{debug, error, warn};

use crate::config::DEFAULT_STORAGE_KEY;
use crate::record::{self, NewTeacher, ProgressStatus, Teacher, TeacherPatch};
use crate::storage::{MemoryStorage, Storage};

/// Owned record store over a storage substrate
pub struct RecordStore<S: Storage> {
    /// Slot substrate
    storage: S,

    /// Slot key the list is persisted under
    key: String,

    /// Records in insertion order
    records: Vec<Teacher>,
}

impl RecordStore<MemoryStorage> {
    /// Fresh store over volatile storage
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new(), DEFAULT_STORAGE_KEY)
    }
}

impl<S: Storage> RecordStore<S> {
    /// Open a store, loading whatever the slot holds
    ///
    /// Absent, unreadable or malformed slots all yield an empty store.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = Self::load(&storage, &key);

        debug!(key = %key, records = records.len(), "Record store opened");

        Self {
            storage,
            key,
            records,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a new record and return it
    pub fn add(&mut self, new: NewTeacher) -> Teacher {
        let mut id = record::generate_id();
        while self.get(&id).is_some() {
            id = record::generate_id();
        }

        let teacher = Teacher::create(id, new, record::now());
        debug!(id = %teacher.id, nip = %teacher.nip, "Record added");

        self.records.push(teacher.clone());
        self.persist();

        teacher
    }

    /// Merge a patch into the record with `id`
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub fn update(&mut self, id: &str, patch: TeacherPatch) -> Option<Teacher> {
        let teacher = self.records.iter_mut().find(|t| t.id == id)?;
        teacher.apply(patch);
        let updated = teacher.clone();

        debug!(id = %id, "Record updated");
        self.persist();

        Some(updated)
    }

    /// Set the status of every record whose id is listed
    ///
    /// Returns the number of records touched.
    pub fn update_many(&mut self, ids: &[String], status: ProgressStatus) -> usize {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();

        let mut touched = 0;
        for teacher in self.records.iter_mut().filter(|t| wanted.contains(t.id.as_str())) {
            teacher.apply(TeacherPatch::status(status));
            touched += 1;
        }

        if touched > 0 {
            debug!(count = touched, status = %status, "Bulk status update");
            self.persist();
        }
        touched
    }

    /// Delete the record with `id`; absent ids are a no-op
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|t| t.id != id);

        let removed = self.records.len() != before;
        if removed {
            debug!(id = %id, "Record removed");
            self.persist();
        }
        removed
    }

    /// Delete every record whose id is listed
    pub fn remove_many(&mut self, ids: &[String]) -> usize {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();

        let before = self.records.len();
        self.records.retain(|t| !wanted.contains(t.id.as_str()));

        let removed = before - self.records.len();
        if removed > 0 {
            debug!(count = removed, "Records removed");
            self.persist();
        }
        removed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether any record other than `excluding_id` already uses `nip`
    ///
    /// Advisory only; the store never rejects duplicates.
    pub fn exists(&self, nip: &str, excluding_id: Option<&str>) -> bool {
        self.records
            .iter()
            .any(|t| t.nip == nip && Some(t.id.as_str()) != excluding_id)
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Teacher> {
        self.records.iter().find(|t| t.id == id)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Teacher] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The slot key records are persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage substrate
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the full record list to the slot
    ///
    /// Returns whether the write succeeded; failures are logged, not raised.
    pub fn persist(&self) -> bool {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to serialize records");
                return false;
            }
        };

        match self.storage.write(&self.key, &json) {
            Ok(()) => true,
            Err(e) => {
                error!(key = %self.key, error = %e, "Failed to persist records");
                false
            }
        }
    }

    /// Read and decode the slot, falling back to an empty list
    fn load(storage: &S, key: &str) -> Vec<Teacher> {
        let raw = match storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read stored records, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding malformed stored records");
                Vec::new()
            }
        }
    }
}
