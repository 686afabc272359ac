//! JSON-file catalog store.
//!
//! # Responsibility
//! - Implement [`RecordStore`] over a single flat JSON document.
//! - Own all read/parse/serialize/write details for the catalog file.
//!
//! # Invariants
//! - Reads always parse the whole document; a parse failure yields
//!   `StoreError::Malformed`, never a partial catalog.
//! - Writes serialize the whole catalog and replace the file content.
//! - `created_at` is stamped exactly once, inside [`RecordStore::add`].

use crate::model::record::{Catalog, Record, RecordDraft};
use crate::search::substring::filter_records;
use crate::store::{RecordStore, StoreError, StoreResult};
use chrono::Local;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// On-disk timestamp format for `created_at` and access-log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Catalog store backed by one JSON file.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    /// Creates a store over the given catalog file path.
    ///
    /// The file is not touched here; call [`RecordStore::initialize`] on
    /// startup before any other operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_catalog(&self) -> StoreResult<Catalog> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_catalog(&self, catalog: &Catalog) -> StoreResult<()> {
        // Serialize before touching the file so a serialization failure
        // cannot leave a truncated document behind.
        let text = serde_json::to_string_pretty(catalog).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, text).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn stamp_now() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl RecordStore for JsonCatalogStore {
    fn initialize(&self) -> StoreResult<()> {
        if self.path.exists() {
            info!(
                "event=catalog_init module=store status=ok outcome=existing path={}",
                self.path.display()
            );
            return Ok(());
        }

        match self.write_catalog(&Catalog::empty()) {
            Ok(()) => {
                info!(
                    "event=catalog_init module=store status=ok outcome=created path={}",
                    self.path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=catalog_init module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    fn load_all(&self) -> StoreResult<Vec<Record>> {
        let started_at = Instant::now();
        match self.read_catalog() {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=store status=ok count={} duration_ms={}",
                    catalog.scps.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(catalog.scps)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn add(&self, draft: RecordDraft) -> StoreResult<Record> {
        let mut catalog = self.read_catalog()?;
        let record = draft.into_record(Self::stamp_now());
        catalog.scps.push(record.clone());
        self.write_catalog(&catalog)?;

        info!(
            "event=record_add module=store status=ok scp_id={} count={}",
            record.scp_id,
            catalog.scps.len()
        );
        Ok(record)
    }

    fn find_by_id(&self, scp_id: &str) -> StoreResult<Record> {
        // First match wins when duplicate ids exist in the document.
        self.load_all()?
            .into_iter()
            .find(|record| record.scp_id == scp_id)
            .ok_or_else(|| StoreError::NotFound(scp_id.to_string()))
    }

    fn delete_by_id(&self, scp_id: &str) -> StoreResult<usize> {
        let mut catalog = self.read_catalog()?;
        let before = catalog.scps.len();
        catalog.scps.retain(|record| record.scp_id != scp_id);
        let removed = before - catalog.scps.len();
        self.write_catalog(&catalog)?;

        info!(
            "event=record_delete module=store status=ok scp_id={} removed={}",
            scp_id, removed
        );
        Ok(removed)
    }

    fn search(&self, query: &str) -> StoreResult<Vec<Record>> {
        let records = self.load_all()?;
        Ok(filter_records(&records, query))
    }
}
