//! Startup access log writer.
//!
//! # Responsibility
//! - Append one `[<timestamp>] access ip: <ip>` line per launch.
//! - Resolve the local machine's hostname to an IPv4 address for that line.
//!
//! # Invariants
//! - Every failure here is swallowed and reported through the `log` facade
//!   only; access logging is never surfaced to the user and never fatal.
//! - The resolved address is the local host's own, by contract; there is no
//!   network boundary in this single-process application.

use crate::store::json_store::TIMESTAMP_FORMAT;
use chrono::Local;
use log::{info, warn};
use std::io::Write;
use std::net::{IpAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

const ACCESS_LOG_HEADER: &str = "SCP catalog access log";
const ACCESS_LABEL: &str = "access ip";

/// Append-only access log over one text file.
pub struct AccessLog {
    path: PathBuf,
}

impl AccessLog {
    /// Creates a writer over the given log file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the log file with its header line when absent.
    ///
    /// Best-effort: creation failures are warn-logged and swallowed.
    pub fn initialize(&self) {
        if self.path.exists() {
            return;
        }
        if let Err(err) = std::fs::write(&self.path, format!("{ACCESS_LOG_HEADER}\n")) {
            warn!(
                "event=access_log_init module=access_log status=error path={} error={}",
                self.path.display(),
                err
            );
        }
    }

    /// Resolves the local IPv4 address and appends one access line.
    ///
    /// Best-effort: resolution and I/O failures are warn-logged and swallowed.
    pub fn record_startup(&self) {
        let Some(ip) = resolve_local_ipv4() else {
            warn!("event=access_log_append module=access_log status=error error=hostname_resolution_failed");
            return;
        };

        match self.append_access_line(ip) {
            Ok(()) => {
                info!(
                    "event=access_log_append module=access_log status=ok ip={}",
                    ip
                );
            }
            Err(err) => {
                warn!(
                    "event=access_log_append module=access_log status=error path={} error={}",
                    self.path.display(),
                    err
                );
            }
        }
    }

    /// Appends one timestamped access line for `ip`.
    pub fn append_access_line(&self, ip: IpAddr) -> std::io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", format_entry(&timestamp, ip))
    }
}

fn format_entry(timestamp: &str, ip: IpAddr) -> String {
    format!("[{timestamp}] {ACCESS_LABEL}: {ip}")
}

/// Resolves the local hostname to an IPv4 address.
///
/// Returns `None` when the hostname cannot be determined or resolves to no
/// IPv4 address.
fn resolve_local_ipv4() -> Option<IpAddr> {
    let hostname = std::env::var("HOSTNAME")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "localhost".to_string());

    let addrs = (hostname.as_str(), 0u16).to_socket_addrs().ok()?;
    addrs.map(|addr| addr.ip()).find(IpAddr::is_ipv4)
}
