//! Workspace Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Workspace UUID
pub type WorkspaceUuid = TypedUuid<WorkspaceRecord>;

/// Workspace Record
#[derive(Debug, Clone)]
pub struct WorkspaceRecord {
    /// Unique workspace identifier.
    pub uuid: WorkspaceUuid,

    /// URL-safe unique identifier used for header-based selection.
    pub slug: String,

    /// Human-readable workspace name.
    pub name: String,

    /// Deactivated workspaces are hidden from resolution but never
    /// hard-deleted while referenced.
    pub active: bool,

    /// Workspace creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
