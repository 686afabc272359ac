//! Record and catalog document model.
//!
//! # Responsibility
//! - Define the persisted record shape and the top-level catalog document.
//! - Provide the UI-suggested object class enumeration.
//!
//! # Invariants
//! - Field names below are the on-disk JSON names; renaming any of them is a
//!   document format change.
//! - `object_class` is stored as free text. [`ObjectClass`] is a suggestion
//!   list for form inputs, not a validation gate.

use serde::{Deserialize, Serialize};

/// UI-suggested containment classes.
///
/// The store accepts any string for `object_class`; this enum only feeds the
/// add-form dropdown and display helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Safe,
    Euclid,
    Keter,
    Thaumiel,
    Neutralized,
}

impl ObjectClass {
    /// All suggested classes in dropdown order.
    pub fn suggested() -> &'static [ObjectClass] {
        &[
            ObjectClass::Safe,
            ObjectClass::Euclid,
            ObjectClass::Keter,
            ObjectClass::Thaumiel,
            ObjectClass::Neutralized,
        ]
    }

    /// Canonical display label, also the stored string for suggested classes.
    pub fn label(self) -> &'static str {
        match self {
            ObjectClass::Safe => "Safe",
            ObjectClass::Euclid => "Euclid",
            ObjectClass::Keter => "Keter",
            ObjectClass::Thaumiel => "Thaumiel",
            ObjectClass::Neutralized => "Neutralized",
        }
    }

    /// Parses a stored class string back to a suggested class, if it is one.
    pub fn parse(value: &str) -> Option<ObjectClass> {
        match value {
            "Safe" => Some(ObjectClass::Safe),
            "Euclid" => Some(ObjectClass::Euclid),
            "Keter" => Some(ObjectClass::Keter),
            "Thaumiel" => Some(ObjectClass::Thaumiel),
            "Neutralized" => Some(ObjectClass::Neutralized),
            _ => None,
        }
    }
}

/// One persisted catalog entry.
///
/// All fields are strings by document contract, `created_at` included
/// (formatted `YYYY-MM-DD HH:MM:SS` by the store at add time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Free-form identifier, e.g. `049` or `XXX`. Intended unique, not enforced.
    pub scp_id: String,
    /// Containment class text. See [`ObjectClass`] for the suggested set.
    pub object_class: String,
    /// Display name, may be empty.
    pub name: String,
    /// Free multi-line body. Never searched.
    pub description: String,
    /// Free multi-line body. Never searched.
    pub containment_procedure: String,
    /// Stamped by the store on add; immutable afterwards.
    pub created_at: String,
}

/// Caller-provided fields for a new record, before the store stamps
/// `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub scp_id: String,
    pub object_class: String,
    pub name: String,
    pub description: String,
    pub containment_procedure: String,
}

impl RecordDraft {
    /// Builds a draft from the five add-form fields.
    pub fn new(
        scp_id: impl Into<String>,
        object_class: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        containment_procedure: impl Into<String>,
    ) -> Self {
        Self {
            scp_id: scp_id.into(),
            object_class: object_class.into(),
            name: name.into(),
            description: description.into(),
            containment_procedure: containment_procedure.into(),
        }
    }

    /// Completes the draft into a persisted record with the given timestamp.
    pub fn into_record(self, created_at: String) -> Record {
        Record {
            scp_id: self.scp_id,
            object_class: self.object_class,
            name: self.name,
            description: self.description,
            containment_procedure: self.containment_procedure,
            created_at,
        }
    }
}

/// The whole persisted document: an insertion-ordered sequence of records
/// under a single `scps` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub scps: Vec<Record>,
}

impl Catalog {
    /// Empty catalog, the first-run document content.
    pub fn empty() -> Self {
        Self::default()
    }
}
