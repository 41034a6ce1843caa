//! Depot helper extensions.

use std::any::Any;

use atrium_app::{auth::AuthenticatedUser, domain::workspaces::records::WorkspaceUuid};
use salvo::prelude::{Depot, StatusError};

const AUTH_USER_KEY: &str = "atrium.auth_user";
const WORKSPACE_UUID_KEY: &str = "atrium.workspace_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_auth_user(&mut self, user: AuthenticatedUser);

    fn auth_user_or_401(&self) -> Result<&AuthenticatedUser, StatusError>;

    fn insert_workspace_uuid(&mut self, workspace: WorkspaceUuid);

    /// The workspace resolved for this request. Missing tenant context is a
    /// deny, not an unfiltered pass.
    fn workspace_uuid_or_403(&self) -> Result<WorkspaceUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_auth_user(&mut self, user: AuthenticatedUser) {
        self.insert(AUTH_USER_KEY, user);
    }

    fn auth_user_or_401(&self) -> Result<&AuthenticatedUser, StatusError> {
        self.get::<AuthenticatedUser>(AUTH_USER_KEY)
            .map_err(|_ignored| StatusError::unauthorized().brief("Not authenticated"))
    }

    fn insert_workspace_uuid(&mut self, workspace: WorkspaceUuid) {
        self.insert(WORKSPACE_UUID_KEY, workspace);
    }

    fn workspace_uuid_or_403(&self) -> Result<WorkspaceUuid, StatusError> {
        self.get::<WorkspaceUuid>(WORKSPACE_UUID_KEY)
            .copied()
            .map_err(|_ignored| {
                StatusError::forbidden().brief("No workspace resolved for this request")
            })
    }
}
