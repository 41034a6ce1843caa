//! Workspaces Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::workspaces::{
    data::NewWorkspace,
    records::{WorkspaceRecord, WorkspaceUuid},
};

const CREATE_WORKSPACE_SQL: &str = include_str!("sql/create_workspace.sql");
const GET_WORKSPACE_SQL: &str = include_str!("sql/get_workspace.sql");
const FIND_ACTIVE_BY_SLUG_SQL: &str = include_str!("sql/find_active_workspace_by_slug.sql");
const FIND_BY_SLUG_SQL: &str = include_str!("sql/find_workspace_by_slug.sql");
const DEACTIVATE_WORKSPACE_SQL: &str = include_str!("sql/deactivate_workspace.sql");
const INSERT_ADMIN_WORKSPACE_SQL: &str = include_str!("sql/insert_admin_workspace.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed workspaces repository.
pub(crate) struct PgWorkspacesRepository {
    pool: PgPool,
}

impl PgWorkspacesRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_workspace(
        &self,
        workspace: NewWorkspace,
    ) -> Result<WorkspaceRecord, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(CREATE_WORKSPACE_SQL)
            .bind(workspace.uuid.into_uuid())
            .bind(workspace.slug)
            .bind(workspace.name)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<WorkspaceRecord, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(GET_WORKSPACE_SQL)
            .bind(workspace.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_active_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<WorkspaceRecord>, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(FIND_ACTIVE_BY_SLUG_SQL)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn deactivate_workspace(
        &self,
        workspace: WorkspaceUuid,
    ) -> Result<Option<WorkspaceRecord>, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(DEACTIVATE_WORKSPACE_SQL)
            .bind(workspace.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts the admin workspace unless its slug already exists. Returns
    /// `None` when another writer won the uniqueness race.
    pub(crate) async fn insert_admin_workspace(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        workspace: NewWorkspace,
    ) -> Result<Option<WorkspaceRecord>, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(INSERT_ADMIN_WORKSPACE_SQL)
            .bind(workspace.uuid.into_uuid())
            .bind(workspace.slug)
            .bind(workspace.name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Option<WorkspaceRecord>, sqlx::Error> {
        query_as::<Postgres, WorkspaceRecord>(FIND_BY_SLUG_SQL)
            .bind(slug)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for WorkspaceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: WorkspaceUuid::from_uuid(row.try_get("uuid")?),
            slug: row.try_get("slug")?,
            name: row.try_get("name")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
