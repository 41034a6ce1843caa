//! User Data

use crate::domain::{users::records::UserUuid, workspaces::records::WorkspaceUuid};

/// New User Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    /// UUID to assign to the user row.
    pub uuid: UserUuid,

    /// Login email to persist.
    pub email: String,

    /// Workspace to attach the user to, if already known.
    pub workspace_uuid: Option<WorkspaceUuid>,

    /// Elevated privilege flag.
    pub superuser: bool,
}
