//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level catalog functions to Dart via FRB.
//! - Keep error semantics simple for the presentation shell: every store
//!   failure comes back as a response envelope, never an exception.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The shell holds no independent source of truth: it re-renders from
//!   `catalog_list` after every mutating call.

use log::info;
use scpvault_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AccessLog, JsonCatalogStore, ObjectClass, Record, RecordService, StoreResult,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const CATALOG_FILE_NAME: &str = "scp_database.json";
const ACCESS_LOG_FILE_NAME: &str = "access_log.txt";
static CATALOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static ACCESS_LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Suggested object classes for the add-form dropdown.
///
/// # FFI contract
/// - Suggestion only; the store accepts any class text the form submits.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn object_class_options() -> Vec<String> {
    ObjectClass::suggested()
        .iter()
        .map(|class| class.label().to_string())
        .collect()
}

/// One list/search row: the `(id, class, name)` triple the shell renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub scp_id: String,
    pub object_class: String,
    pub name: String,
}

/// Response envelope for list and search flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListResponse {
    /// Whether the catalog was read successfully.
    pub ok: bool,
    /// Rows in catalog order (empty on failure).
    pub items: Vec<CatalogRow>,
    /// Human-readable message for diagnostics/notifications.
    pub message: String,
}

/// Full record payload for the read-only detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail {
    pub scp_id: String,
    pub object_class: String,
    pub name: String,
    pub description: String,
    pub containment_procedure: String,
    pub created_at: String,
}

/// Response envelope for the detail view flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetailResponse {
    pub ok: bool,
    /// Present only when the lookup matched a record.
    pub record: Option<RecordDetail>,
    pub message: String,
}

/// Generic action response envelope for mutating flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Number of records removed (delete flow only).
    pub removed: u32,
    /// Human-readable message for diagnostics/notifications.
    pub message: String,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            removed: 0,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            removed: 0,
            message: message.into(),
        }
    }
}

/// Prepares both backing files and appends the launch access-log line.
///
/// # FFI contract
/// - Called once by the shell before rendering the list.
/// - Catalog initialization failures are returned in the envelope; the
///   access-log write stays best-effort and never fails the startup.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn startup_catalog() -> CatalogActionResponse {
    let service = catalog_service();
    if let Err(err) = service.initialize() {
        return CatalogActionResponse::failure(format!("startup_catalog failed: {err}"));
    }

    let access_log = AccessLog::new(resolve_access_log_path());
    access_log.initialize();
    access_log.record_startup();

    info!(
        "event=shell_startup module=ffi status=ok catalog={}",
        resolve_catalog_path().display()
    );
    CatalogActionResponse::success("Catalog ready.")
}

/// Lists the full catalog as `(id, class, name)` rows.
///
/// # FFI contract
/// - Sync call, file-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_list() -> CatalogListResponse {
    to_list_response(catalog_service().list_records(), "catalog_list")
}

/// Adds one record from the five add-form fields.
///
/// # FFI contract
/// - `created_at` is stamped by the store; the form never supplies it.
/// - Duplicate ids are accepted (store contract).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_add(
    scp_id: String,
    object_class: String,
    name: String,
    description: String,
    containment_procedure: String,
) -> CatalogActionResponse {
    match catalog_service().add_record(
        scp_id.trim().to_string(),
        object_class,
        name,
        description,
        containment_procedure,
    ) {
        Ok(record) => {
            CatalogActionResponse::success(format!("Record {} added.", record.scp_id))
        }
        Err(err) => CatalogActionResponse::failure(format!("catalog_add failed: {err}")),
    }
}

/// Fetches the detail view payload for one record.
///
/// # FFI contract
/// - A lookup miss returns `ok=false` with `record=None`, not an exception.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_get(scp_id: String) -> RecordDetailResponse {
    match catalog_service().get_record(&scp_id) {
        Ok(record) => RecordDetailResponse {
            ok: true,
            record: Some(to_record_detail(record)),
            message: String::new(),
        },
        Err(err) => RecordDetailResponse {
            ok: false,
            record: None,
            message: format!("catalog_get failed: {err}"),
        },
    }
}

/// Deletes every record with the given id; reports the removed count.
///
/// # FFI contract
/// - Removing zero records is a success with `removed=0`.
/// - The shell shows its own confirmation prompt before calling this.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_delete(scp_id: String) -> CatalogActionResponse {
    match catalog_service().delete_record(&scp_id) {
        Ok(removed) => CatalogActionResponse {
            ok: true,
            removed: removed as u32,
            message: format!("Removed {removed} record(s)."),
        },
        Err(err) => CatalogActionResponse::failure(format!("catalog_delete failed: {err}")),
    }
}

/// Searches id, class and name case-insensitively.
///
/// # FFI contract
/// - A blank query returns the full catalog, matching the refresh flow.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_search(query: String) -> CatalogListResponse {
    to_list_response(catalog_service().search_records(&query), "catalog_search")
}

fn catalog_service() -> RecordService<JsonCatalogStore> {
    RecordService::new(JsonCatalogStore::new(resolve_catalog_path()))
}

fn resolve_catalog_path() -> PathBuf {
    CATALOG_PATH
        .get_or_init(|| path_from_env_or_temp("SCPVAULT_DB_PATH", CATALOG_FILE_NAME))
        .clone()
}

fn resolve_access_log_path() -> PathBuf {
    ACCESS_LOG_PATH
        .get_or_init(|| path_from_env_or_temp("SCPVAULT_ACCESS_LOG_PATH", ACCESS_LOG_FILE_NAME))
        .clone()
}

fn path_from_env_or_temp(env_key: &str, file_name: &str) -> PathBuf {
    if let Ok(raw) = std::env::var(env_key) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(file_name)
}

fn to_list_response(result: StoreResult<Vec<Record>>, operation: &str) -> CatalogListResponse {
    match result {
        Ok(records) => {
            let items = records.into_iter().map(to_catalog_row).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No records.".to_string()
            } else {
                format!("{} record(s).", items.len())
            };
            CatalogListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => CatalogListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("{operation} failed: {err}"),
        },
    }
}

fn to_catalog_row(record: Record) -> CatalogRow {
    CatalogRow {
        scp_id: record.scp_id,
        object_class: record.object_class,
        name: record.name,
    }
}

fn to_record_detail(record: Record) -> RecordDetail {
    RecordDetail {
        scp_id: record.scp_id,
        object_class: record.object_class,
        name: record.name,
        description: record.description,
        containment_procedure: record.containment_procedure,
        created_at: record.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_add, catalog_delete, catalog_get, catalog_list, catalog_search, core_version,
        init_logging, object_class_options, ping, startup_catalog,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn object_class_options_cover_the_suggested_set() {
        let options = object_class_options();
        assert_eq!(
            options,
            vec!["Safe", "Euclid", "Keter", "Thaumiel", "Neutralized"]
        );
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    // Catalog calls share one process-wide file path, so the whole flow runs
    // in a single test to keep the read-modify-write store race-free.
    #[test]
    fn catalog_flow_end_to_end() {
        let db_path = std::env::temp_dir().join(format!(
            "scpvault-ffi-{}-{}.json",
            std::process::id(),
            unique_nanos()
        ));
        std::env::set_var("SCPVAULT_DB_PATH", &db_path);
        let log_path = std::env::temp_dir().join(format!(
            "scpvault-ffi-access-{}-{}.txt",
            std::process::id(),
            unique_nanos()
        ));
        std::env::set_var("SCPVAULT_ACCESS_LOG_PATH", &log_path);

        let started = startup_catalog();
        assert!(started.ok, "{}", started.message);
        // Second startup must be harmless.
        assert!(startup_catalog().ok);

        let token = format!("049-{}", unique_nanos());
        let added = catalog_add(
            token.clone(),
            "Euclid".to_string(),
            "The Plague Doctor".to_string(),
            "description".to_string(),
            "containment".to_string(),
        );
        assert!(added.ok, "{}", added.message);

        let listed = catalog_list();
        assert!(listed.ok);
        assert!(listed.items.iter().any(|row| row.scp_id == token));

        let detail = catalog_get(token.clone());
        assert!(detail.ok, "{}", detail.message);
        let record = detail.record.expect("detail should carry the record");
        assert_eq!(record.object_class, "Euclid");
        assert!(!record.created_at.is_empty());

        let miss = catalog_get("no-such-id".to_string());
        assert!(!miss.ok);
        assert!(miss.record.is_none());
        assert!(miss.message.contains("not found"));

        let hits = catalog_search("euclid".to_string());
        assert!(hits.ok);
        assert!(hits.items.iter().any(|row| row.scp_id == token));

        let deleted = catalog_delete(token.clone());
        assert!(deleted.ok);
        assert_eq!(deleted.removed, 1);

        let after = catalog_list();
        assert!(after.ok);
        assert!(after.items.iter().all(|row| row.scp_id != token));

        let noop = catalog_delete(token);
        assert!(noop.ok);
        assert_eq!(noop.removed, 0);
    }

    fn unique_nanos() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos()
    }
}
