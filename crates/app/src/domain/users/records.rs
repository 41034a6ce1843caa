//! User Records

use jiff::Timestamp;

use crate::{domain::workspaces::records::WorkspaceUuid, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Unique user identifier.
    pub uuid: UserUuid,

    /// Login email, unique across all workspaces.
    pub email: String,

    /// Workspace the user belongs to; at most one, absent for superusers
    /// awaiting provisioning.
    pub workspace_uuid: Option<WorkspaceUuid>,

    /// Elevated privilege flag.
    pub superuser: bool,

    /// Creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
