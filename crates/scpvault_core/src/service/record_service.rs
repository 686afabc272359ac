//! Record use-case service.
//!
//! # Responsibility
//! - Provide stable catalog entry points for core callers.
//! - Delegate persistence to store implementations.
//!
//! # Invariants
//! - Service APIs never bypass store persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::record::{Record, RecordDraft};
use crate::store::{RecordStore, StoreResult};

/// Use-case service wrapper for catalog operations.
pub struct RecordService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecordService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Ensures the backing catalog file exists. Safe to call on every startup.
    pub fn initialize(&self) -> StoreResult<()> {
        self.store.initialize()
    }

    /// Lists the full catalog in insertion order.
    pub fn list_records(&self) -> StoreResult<Vec<Record>> {
        self.store.load_all()
    }

    /// Adds a record built from the five add-form fields.
    ///
    /// # Contract
    /// - `created_at` is stamped by the store, not the caller.
    /// - Duplicate ids are accepted; the store does not enforce uniqueness.
    pub fn add_record(
        &self,
        scp_id: impl Into<String>,
        object_class: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        containment_procedure: impl Into<String>,
    ) -> StoreResult<Record> {
        let draft = RecordDraft::new(
            scp_id,
            object_class,
            name,
            description,
            containment_procedure,
        );
        self.store.add(draft)
    }

    /// Gets the first record matching `scp_id` exactly.
    ///
    /// Returns store-level not-found errors unchanged.
    pub fn get_record(&self, scp_id: &str) -> StoreResult<Record> {
        self.store.find_by_id(scp_id)
    }

    /// Deletes every record matching `scp_id` exactly; returns removed count.
    pub fn delete_record(&self, scp_id: &str) -> StoreResult<usize> {
        self.store.delete_by_id(scp_id)
    }

    /// Searches id, class and name case-insensitively.
    pub fn search_records(&self, query: &str) -> StoreResult<Vec<Record>> {
        self.store.search(query)
    }
}
