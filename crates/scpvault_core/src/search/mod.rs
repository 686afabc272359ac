//! Catalog search entry points.
//!
//! # Responsibility
//! - Expose the substring filter used by the store's search operation.
//! - Keep result shaping inside core.

pub mod substring;
