//! Workspace
//!
//! The state container a front end drives: the record store plus the
//! current filters, sort preference and row selection.
//!
//! ## Collaborator Callbacks
//! - `submit(form)`         form submission (validate, encode photo, add)
//! - `update(id, patch)`    inline table edit
//! - `delete(id)`           row deletion
//! - `set_filters` / `update_filters` / `request_sort`  view changes
//!
//! Everything runs synchronously on the caller's thread; a front end
//! re-renders from `view()` after each call.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, TrackerError};
use crate::export::{self, ExportOptions};
use crate::query::{self, FilterCriteria, SortConfig, SortField, Statistics};
use crate::record::{ProgressStatus, Teacher, TeacherPatch};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::store::RecordStore;
use crate::validation::{self, TeacherForm};

/// Owned, injectable application state
pub struct Workspace<S: Storage> {
    config: Config,
    store: RecordStore<S>,
    filters: FilterCriteria,
    sort: SortConfig,

    /// Selected record ids in selection order
    selected: Vec<String>,
}

impl Workspace<FileStorage> {
    /// Open a workspace persisted under `config.data_dir`
    pub fn open(config: Config) -> Result<Self> {
        let storage = FileStorage::open(&config.data_dir)?;
        Ok(Self::with_storage(config, storage))
    }
}

impl Workspace<MemoryStorage> {
    /// Workspace over volatile storage with default config
    pub fn in_memory() -> Self {
        Self::with_storage(Config::default(), MemoryStorage::new())
    }
}

impl<S: Storage> Workspace<S> {
    /// Build a workspace over any storage substrate
    pub fn with_storage(config: Config, storage: S) -> Self {
        let store = RecordStore::open(storage, config.storage_key.clone());

        Self {
            config,
            store,
            filters: FilterCriteria::default(),
            sort: SortConfig::default(),
            selected: Vec::new(),
        }
    }

    // =========================================================================
    // Record Callbacks
    // =========================================================================

    /// Validate a submitted form and add the record
    ///
    /// Invalid forms return `TrackerError::Validation` carrying every field
    /// error. A duplicate nip is only warned about.
    pub fn submit(&mut self, form: TeacherForm) -> Result<Teacher> {
        let report = validation::validate_with_limit(&form, self.config.max_photo_bytes);
        if !report.is_valid() {
            debug!(errors = %report, "Form rejected");
            return Err(TrackerError::Validation(report));
        }

        let photo = form
            .photo
            .as_ref()
            .map(|upload| upload.to_data_uri())
            .ok_or_else(|| TrackerError::Photo("Foto guru wajib diupload".to_string()))?;

        if self.store.exists(form.nip.trim(), None) {
            warn!(nip = %form.nip.trim(), "A record with this NIP already exists");
        }

        let new = form.into_new_teacher(photo)?;
        Ok(self.store.add(new))
    }

    /// Apply a table edit; `None` when the id is unknown
    pub fn update(&mut self, id: &str, patch: TeacherPatch) -> Option<Teacher> {
        self.store.update(id, patch)
    }

    /// Set the status of several records at once
    pub fn update_many(&mut self, ids: &[String], status: ProgressStatus) -> usize {
        self.store.update_many(ids, status)
    }

    /// Delete a record and drop it from the selection
    pub fn delete(&mut self, id: &str) -> bool {
        self.selected.retain(|selected| selected != id);
        self.store.remove(id)
    }

    /// Delete several records and clear the selection
    pub fn delete_many(&mut self, ids: &[String]) -> usize {
        self.selected.clear();
        self.store.remove_many(ids)
    }

    /// Advisory duplicate check for the form
    pub fn nip_exists(&self, nip: &str, excluding_id: Option<&str>) -> bool {
        self.store.exists(nip, excluding_id)
    }

    // =========================================================================
    // View Callbacks
    // =========================================================================

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    /// Change part of the filter criteria in place
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        change(&mut self.filters);
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    /// Column-header click on `field`
    pub fn request_sort(&mut self, field: SortField) {
        self.sort.request(field);
    }

    /// Records passing the filters, in sort order
    pub fn view(&self) -> Vec<&Teacher> {
        self.sort.apply(query::filter(self.store.records(), &self.filters))
    }

    /// Summary counts as of `today`
    pub fn statistics(&self, today: NaiveDate) -> Statistics {
        Statistics::compute(self.store.records(), self.view().len(), today)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select or unselect one record
    pub fn toggle_selection(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|selected| selected == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Select every record in the current view
    pub fn select_all(&mut self) {
        self.selected = self.view().iter().map(|t| t.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Selected records in store order
    pub fn selected_records(&self) -> Vec<&Teacher> {
        let wanted: HashSet<&str> = self.selected.iter().map(String::as_str).collect();
        self.store
            .records()
            .iter()
            .filter(|t| wanted.contains(t.id.as_str()))
            .collect()
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export every record
    pub fn export_all(&self, options: &ExportOptions) -> Result<PathBuf> {
        let records: Vec<&Teacher> = self.store.records().iter().collect();
        export::export_records(&records, options, &self.config.export_dir)
    }

    /// Export the current view under the filtered filename prefix
    pub fn export_view(&self, options: &ExportOptions) -> Result<PathBuf> {
        let options = options.clone().filtered();
        export::export_records(&self.view(), &options, &self.config.export_dir)
    }

    /// Export the selected records
    pub fn export_selected(&self, options: &ExportOptions) -> Result<PathBuf> {
        export::export_records(&self.selected_records(), options, &self.config.export_dir)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn records(&self) -> &[Teacher] {
        self.store.records()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
