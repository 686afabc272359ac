//! Core domain logic for ScpVault.
//! This crate is the single source of truth for catalog invariants.

pub mod access_log;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use access_log::AccessLog;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Catalog, ObjectClass, Record, RecordDraft};
pub use search::substring::filter_records;
pub use service::record_service::RecordService;
pub use store::json_store::JsonCatalogStore;
pub use store::{RecordStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
