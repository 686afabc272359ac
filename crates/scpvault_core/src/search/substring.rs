//! Case-insensitive substring filter over loaded records.
//!
//! # Responsibility
//! - Match a query against the searchable record columns.
//! - Preserve original catalog order in the result.
//!
//! # Invariants
//! - Only `scp_id`, `object_class` and `name` are searched; the two free-text
//!   bodies are never matched.
//! - A blank query returns the full input unchanged.

use crate::model::record::Record;

/// Filters records whose id, class or name contains `query`,
/// case-insensitively. Matches keep their original order.
pub fn filter_records(records: &[Record], query: &str) -> Vec<Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect()
}

fn record_matches(record: &Record, lowercase_needle: &str) -> bool {
    [&record.scp_id, &record.object_class, &record.name]
        .into_iter()
        .any(|column| column.to_lowercase().contains(lowercase_needle))
}
