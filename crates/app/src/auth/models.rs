//! Auth data models.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::{users::records::UserUuid, workspaces::records::WorkspaceUuid};

/// Identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_uuid: UserUuid,

    /// Workspace the user belongs to; absent for superusers awaiting
    /// provisioning.
    pub workspace_uuid: Option<WorkspaceUuid>,

    pub superuser: bool,
}

/// API token metadata persisted in storage. Never contains raw token
/// material.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// Token issuance result carrying the one-time raw token.
#[derive(Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}

impl Debug for IssuedApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("IssuedApiToken")
            .field("token", &"**redacted**")
            .field("metadata", &self.metadata)
            .finish()
    }
}
