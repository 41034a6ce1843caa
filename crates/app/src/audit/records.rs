//! Audit Log Records

use std::str::FromStr;

use jiff::Timestamp;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    domain::{users::records::UserUuid, workspaces::records::WorkspaceUuid},
    uuids::TypedUuid,
};

/// Audit Entry UUID
pub type AuditEntryUuid = TypedUuid<AuditLogEntry>;

/// Kind of mutation an audit entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Restore,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Restore => "restore",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown audit action \"{0}\"")]
pub struct UnknownAuditAction(String);

impl FromStr for AuditAction {
    type Err = UnknownAuditAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "restore" => Ok(Self::Restore),
            other => Err(UnknownAuditAction(other.to_string())),
        }
    }
}

/// One immutable field-level audit record.
///
/// The entity reference is soft (`entity_kind` + `entity_uuid`, no foreign
/// key) so entries outlive the rows they describe.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub uuid: AuditEntryUuid,
    pub workspace_uuid: WorkspaceUuid,
    pub actor_uuid: Option<UserUuid>,
    pub action: AuditAction,
    pub entity_kind: String,
    pub entity_uuid: Uuid,
    pub field_name: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
    pub personal_data: bool,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub recorded_at: Timestamp,
}
