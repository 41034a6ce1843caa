//! Workspaces service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::{
    users::{PgUsersRepository, records::UserUuid},
    workspaces::{
        data::{NewWorkspace, admin_slug},
        errors::WorkspacesServiceError,
        records::{WorkspaceRecord, WorkspaceUuid},
        repository::PgWorkspacesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgWorkspacesService {
    pool: PgPool,
    repository: PgWorkspacesRepository,
    users: PgUsersRepository,
}

impl PgWorkspacesService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgWorkspacesRepository::new(pool.clone()),
            users: PgUsersRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl WorkspacesService for PgWorkspacesService {
    async fn create_workspace(
        &self,
        workspace: NewWorkspace,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError> {
        self.repository
            .create_workspace(workspace)
            .await
            .map_err(Into::into)
    }

    async fn get_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError> {
        self.repository
            .get_workspace(workspace)
            .await
            .map_err(Into::into)
    }

    async fn find_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<WorkspaceRecord>, WorkspacesServiceError> {
        self.repository
            .find_active_by_slug(slug)
            .await
            .map_err(Into::into)
    }

    async fn deactivate_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError> {
        self.repository
            .deactivate_workspace(workspace)
            .await?
            .ok_or(WorkspacesServiceError::NotFound)
    }

    async fn provision_admin_workspace(
        &self,
        user: UserUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError> {
        let slug = admin_slug(user);

        let mut tx = self.pool.begin().await?;

        let inserted = self
            .repository
            .insert_admin_workspace(
                &mut tx,
                NewWorkspace {
                    uuid: WorkspaceUuid::new(),
                    slug: slug.clone(),
                    name: slug.clone(),
                },
            )
            .await?;

        let workspace = match inserted {
            Some(workspace) => {
                info!("provisioned admin workspace {}", workspace.uuid);

                workspace
            }
            // Lost the uniqueness race: read the surviving row instead of
            // erroring.
            None => self
                .repository
                .find_by_slug(&mut tx, &slug)
                .await?
                .ok_or(WorkspacesServiceError::NotFound)?,
        };

        // Leaves users already bound to a workspace untouched, so repeated
        // resolution is idempotent.
        self.users
            .bind_admin_workspace(&mut tx, user, workspace.uuid)
            .await?;

        tx.commit().await?;

        Ok(workspace)
    }
}

#[automock]
#[async_trait]
/// Workspace persistence and provisioning operations.
pub trait WorkspacesService: Send + Sync {
    /// Creates a new workspace.
    async fn create_workspace(
        &self,
        workspace: NewWorkspace,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError>;

    /// Retrieves a workspace by UUID.
    async fn get_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError>;

    /// Resolves an active workspace by its slug.
    async fn find_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<WorkspaceRecord>, WorkspacesServiceError>;

    /// Soft-deactivates a workspace; the row is retained.
    async fn deactivate_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError>;

    /// Gets or creates the dedicated workspace of a superuser and binds it
    /// to the user. Safe to call repeatedly and concurrently.
    async fn provision_admin_workspace(
        &self,
        user: UserUuid,
    ) -> Result<WorkspaceRecord, WorkspacesServiceError>;
}
