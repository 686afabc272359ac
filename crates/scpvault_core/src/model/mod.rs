//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical record shape persisted in the catalog document.
//! - Keep JSON field naming in one place.
//!
//! # Invariants
//! - `scp_id` uniqueness is intended but never enforced by the model; lookup
//!   semantics live in the store layer.
//! - `created_at` is assigned once by the store and never mutated after.

pub mod record;
