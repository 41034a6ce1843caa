//! Explicit audit field schemas.
//!
//! Each audited entity enumerates its fields, serialized values, and
//! personal-data designation through [`Auditable`]. The recorder consults
//! this schema instead of inspecting attributes dynamically, so the set of
//! audited and redactable fields is always visible in one place per entity.

use serde_json::Value;
use uuid::Uuid;

/// One serialized field of an audited entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: &'static str,
    pub value: Value,
    pub personal_data: bool,
}

impl FieldValue {
    #[must_use]
    pub fn new(name: &'static str, value: Value) -> Self {
        Self {
            name,
            value,
            personal_data: false,
        }
    }

    /// A field designated as personal data for compliance reporting.
    #[must_use]
    pub fn personal(name: &'static str, value: Value) -> Self {
        Self {
            name,
            value,
            personal_data: true,
        }
    }
}

/// Entities that expose a field schema to the audit recorder.
pub trait Auditable {
    /// Stable entity identifier stored on each entry.
    const ENTITY_KIND: &'static str;

    fn audit_uuid(&self) -> Uuid;

    fn audit_fields(&self) -> Vec<FieldValue>;
}

/// A single field transition destined for one audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub name: &'static str,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub personal_data: bool,
}

/// Changes describing a freshly created (or restored) entity: no prior
/// values, one entry per schema field.
pub(crate) fn creation_changes(fields: Vec<FieldValue>) -> Vec<FieldChange> {
    fields
        .into_iter()
        .map(|field| FieldChange {
            name: field.name,
            old_value: None,
            new_value: Some(field.value),
            personal_data: field.personal_data,
        })
        .collect()
}

/// Changes capturing final state before a deletion.
pub(crate) fn removal_changes(fields: Vec<FieldValue>) -> Vec<FieldChange> {
    fields
        .into_iter()
        .map(|field| FieldChange {
            name: field.name,
            old_value: Some(field.value),
            new_value: None,
            personal_data: field.personal_data,
        })
        .collect()
}

/// Field-by-field diff between two snapshots of the same entity.
///
/// Fields with equal values emit nothing; every differing field emits
/// exactly one change carrying both serialized values.
pub(crate) fn diff(old: &[FieldValue], new: &[FieldValue]) -> Vec<FieldChange> {
    new.iter()
        .filter_map(|after| {
            let before = old.iter().find(|field| field.name == after.name);

            match before {
                Some(before) if before.value == after.value => None,
                _ => Some(FieldChange {
                    name: after.name,
                    old_value: before.map(|field| field.value.clone()),
                    new_value: Some(after.value.clone()),
                    personal_data: after.personal_data,
                }),
            }
        })
        .collect()
}
