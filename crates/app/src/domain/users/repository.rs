//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    users::{
        data::NewUser,
        records::{UserRecord, UserUuid},
    },
    workspaces::records::WorkspaceUuid,
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const BIND_ADMIN_WORKSPACE_SQL: &str = include_str!("sql/bind_admin_workspace.sql");

#[derive(Debug, Clone)]
/// PostgreSQL-backed users repository.
pub(crate) struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_user(&self, user: NewUser) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.email)
            .bind(user.workspace_uuid.map(WorkspaceUuid::into_uuid))
            .bind(user.superuser)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn get_user(&self, user: UserUuid) -> Result<UserRecord, sqlx::Error> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&self.pool)
            .await
    }

    /// Attaches the provisioned admin workspace to a user that has none.
    /// A user already bound to a workspace is left untouched.
    pub(crate) async fn bind_admin_workspace(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
        workspace: WorkspaceUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(BIND_ADMIN_WORKSPACE_SQL)
            .bind(user.into_uuid())
            .bind(workspace.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            workspace_uuid: row
                .try_get::<Option<Uuid>, _>("workspace_uuid")?
                .map(WorkspaceUuid::from_uuid),
            superuser: row.try_get("superuser")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
