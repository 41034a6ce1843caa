//! Note Records

use jiff::Timestamp;
use serde_json::json;
use uuid::Uuid;

use crate::{
    audit::schema::{Auditable, FieldValue},
    domain::workspaces::records::WorkspaceUuid,
    uuids::TypedUuid,
};

/// Note UUID
pub type NoteUuid = TypedUuid<NoteRecord>;

/// Note Record
#[derive(Debug, Clone)]
pub struct NoteRecord {
    pub uuid: NoteUuid,
    pub workspace_uuid: WorkspaceUuid,
    pub title: String,
    pub body: String,
    pub pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Auditable for NoteRecord {
    const ENTITY_KIND: &'static str = "note";

    fn audit_uuid(&self) -> Uuid {
        self.uuid.into_uuid()
    }

    fn audit_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::new("title", json!(self.title)),
            // Free-form note bodies routinely hold personal information.
            FieldValue::personal("body", json!(self.body)),
            FieldValue::new("pinned", json!(self.pinned)),
        ]
    }
}
